//! Pending issue repository.
//!
//! Stores issues submitted through the Discord form until a moderator validates or
//! rejects them. Each issue owns an ordered list of uploaded files.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::pending_issue::{CreatePendingIssueParam, PendingIssue, UploadedFile},
};

/// Repository providing database operations for pending issues and their files.
pub struct PendingIssueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PendingIssueRepository<'a> {
    /// Creates a new PendingIssueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new pending issue together with its initial files.
    ///
    /// The issue row and file rows are written in one transaction.
    ///
    /// # Arguments
    /// - `param` - Issue content, author and already uploaded files
    ///
    /// # Returns
    /// - `Ok(PendingIssue)` - The stored issue
    /// - `Err(AppError::DbErr)` - Insert failed (e.g. duplicate id)
    pub async fn create(&self, param: CreatePendingIssueParam) -> Result<PendingIssue, AppError> {
        let labels = serde_json::to_string(&param.labels).map_err(|e| {
            InternalError::LabelsJson {
                issue_id: param.id.clone(),
                source: e,
            }
        })?;

        let txn = self.db.begin().await?;

        let issue = entity::pending_issue::ActiveModel {
            id: ActiveValue::Set(param.id.clone()),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            labels: ActiveValue::Set(labels),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        let mut files = Vec::with_capacity(param.files.len());
        for file in &param.files {
            files.push(insert_file(&txn, &param.id, file).await?);
        }

        txn.commit().await?;

        PendingIssue::from_entity(issue, files)
    }

    /// Gets a pending issue with its files, oldest file first.
    ///
    /// # Returns
    /// - `Ok(Some(PendingIssue))` - Issue is still pending
    /// - `Ok(None)` - Issue was validated, rejected or never existed
    /// - `Err(AppError)` - Database or decoding error
    pub async fn get_by_id(&self, id: &str) -> Result<Option<PendingIssue>, AppError> {
        let Some(issue) = entity::prelude::PendingIssue::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let files = entity::prelude::PendingIssueFile::find()
            .filter(entity::pending_issue_file::Column::PendingIssueId.eq(id))
            .order_by_asc(entity::pending_issue_file::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(PendingIssue::from_entity(issue, files)?))
    }

    /// Checks whether an issue is still pending.
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::PendingIssue::find_by_id(id.to_string())
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Appends uploaded files to a pending issue.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of files stored
    /// - `Err(AppError::NotFound)` - The issue is no longer pending
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_files(&self, id: &str, files: &[UploadedFile]) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let exists = entity::prelude::PendingIssue::find_by_id(id.to_string())
            .count(&txn)
            .await?
            > 0;
        if !exists {
            return Err(AppError::NotFound(format!("Pending issue {} not found", id)));
        }

        for file in files {
            insert_file(&txn, id, file).await?;
        }

        txn.commit().await?;

        Ok(files.len() as u64)
    }

    /// Deletes a pending issue and its files.
    ///
    /// # Returns
    /// - `Ok(true)` - The issue was pending and is now removed
    /// - `Ok(false)` - No such pending issue
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PendingIssueFile::delete_many()
            .filter(entity::pending_issue_file::Column::PendingIssueId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::PendingIssue::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Takes a pending issue out of the store so exactly one caller can act on it.
    ///
    /// The issue and its files are read and deleted in one transaction; the delete
    /// decides the winner when two callers race for the same id.
    ///
    /// # Returns
    /// - `Ok(Some(PendingIssue))` - This caller owns the issue; it is no longer pending
    /// - `Ok(None)` - Already claimed, rejected or never existed
    /// - `Err(AppError)` - Database or decoding error
    pub async fn claim(&self, id: &str) -> Result<Option<PendingIssue>, AppError> {
        let txn = self.db.begin().await?;

        let Some(issue) = entity::prelude::PendingIssue::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let files = entity::prelude::PendingIssueFile::find()
            .filter(entity::pending_issue_file::Column::PendingIssueId.eq(id))
            .order_by_asc(entity::pending_issue_file::Column::Id)
            .all(&txn)
            .await?;

        entity::prelude::PendingIssueFile::delete_many()
            .filter(entity::pending_issue_file::Column::PendingIssueId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::PendingIssue::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(PendingIssue::from_entity(issue, files)?))
    }

    /// Puts a claimed issue back, keeping its id, submission time and file order.
    ///
    /// # Returns
    /// - `Ok(())` - The issue is pending again
    /// - `Err(AppError::DbErr)` - Insert failed (e.g. the id was reused meanwhile)
    pub async fn restore(&self, issue: &PendingIssue) -> Result<(), AppError> {
        let labels = serde_json::to_string(&issue.labels).map_err(|e| {
            InternalError::LabelsJson {
                issue_id: issue.id.clone(),
                source: e,
            }
        })?;

        let txn = self.db.begin().await?;

        entity::pending_issue::ActiveModel {
            id: ActiveValue::Set(issue.id.clone()),
            author_id: ActiveValue::Set(issue.author_id.to_string()),
            title: ActiveValue::Set(issue.title.clone()),
            description: ActiveValue::Set(issue.description.clone()),
            labels: ActiveValue::Set(labels),
            created_at: ActiveValue::Set(issue.created_at),
        }
        .insert(&txn)
        .await?;

        for file in &issue.files {
            insert_file(&txn, &issue.id, file).await?;
        }

        txn.commit().await?;

        Ok(())
    }
}

async fn insert_file<C: ConnectionTrait>(
    db: &C,
    issue_id: &str,
    file: &UploadedFile,
) -> Result<entity::pending_issue_file::Model, DbErr> {
    entity::pending_issue_file::ActiveModel {
        pending_issue_id: ActiveValue::Set(issue_id.to_string()),
        filename: ActiveValue::Set(file.filename.clone()),
        url: ActiveValue::Set(file.url.clone()),
        discord_url: ActiveValue::Set(file.discord_url.clone()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
