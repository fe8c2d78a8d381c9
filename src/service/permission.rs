//! Role checks for moderating pending issues.

use std::collections::HashMap;

use serenity::all::{Context, Member, Role, RoleId};

use crate::error::AppError;

/// Whether any of the member's roles carries one of the allowed names.
///
/// # Arguments
/// - `member_roles` - Role ids held by the member
/// - `guild_roles` - All roles of the guild, used to resolve names
/// - `allowed` - Role names granting the permission
pub fn has_moderator_role(
    member_roles: &[RoleId],
    guild_roles: &HashMap<RoleId, Role>,
    allowed: &[&str],
) -> bool {
    member_roles.iter().any(|role_id| {
        guild_roles
            .get(role_id)
            .is_some_and(|role| allowed.contains(&role.name.as_str()))
    })
}

/// Checks whether the interacting user may validate or reject issues.
///
/// Interactions outside a guild carry no member and are never allowed. Guild roles
/// come from the cache and are fetched over HTTP when the guild is not cached.
///
/// # Returns
/// - `Ok(true)` - The member holds one of the allowed roles
/// - `Ok(false)` - No member or no matching role
/// - `Err(AppError::DiscordErr)` - Guild roles could not be fetched
pub async fn can_moderate(
    ctx: &Context,
    member: Option<&Member>,
    allowed: &[&str],
) -> Result<bool, AppError> {
    let Some(member) = member else {
        return Ok(false);
    };

    let cached_roles = ctx
        .cache
        .guild(member.guild_id)
        .map(|guild| guild.roles.clone());
    let guild_roles = match cached_roles {
        Some(roles) => roles,
        None => member.guild_id.roles(&ctx.http).await?,
    };

    Ok(has_moderator_role(&member.roles, &guild_roles, allowed))
}
