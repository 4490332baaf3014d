//! Static role → permission table used by the community board.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Moderator,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Posts,
    Comments,
    Reports,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
    /// Granted only on the caller's own records.
    pub own_only: bool,
}

const fn any(resource: Resource, action: Action) -> Permission {
    Permission {
        resource,
        action,
        own_only: false,
    }
}

const fn own(resource: Resource, action: Action) -> Permission {
    Permission {
        resource,
        action,
        own_only: true,
    }
}

use Action::*;
use Resource::*;

const USER: &[Permission] = &[
    any(Posts, Read),
    any(Posts, Create),
    own(Posts, Update),
    own(Posts, Delete),
    any(Comments, Read),
    any(Comments, Create),
    own(Comments, Update),
    own(Comments, Delete),
    any(Reports, Create),
    own(Reports, Read),
];

const MODERATOR: &[Permission] = &[
    any(Posts, Read),
    any(Posts, Create),
    own(Posts, Update),
    any(Posts, Delete),
    any(Comments, Read),
    any(Comments, Create),
    own(Comments, Update),
    any(Comments, Delete),
    any(Reports, Create),
    any(Reports, Read),
    any(Reports, Update),
];

const ADMIN: &[Permission] = &[
    any(Posts, Read),
    any(Posts, Create),
    any(Posts, Update),
    any(Posts, Delete),
    any(Posts, Manage),
    any(Comments, Read),
    any(Comments, Create),
    any(Comments, Update),
    any(Comments, Delete),
    any(Comments, Manage),
    any(Reports, Create),
    any(Reports, Read),
    any(Reports, Update),
    any(Reports, Manage),
    any(Users, Read),
    any(Users, Update),
    any(Users, Manage),
];

pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::User => USER,
        Role::Moderator => MODERATOR,
        Role::Admin => ADMIN,
    }
}

/// Whether `role` may perform `action` on `resource`; owner-only grants need `is_owner`.
pub fn has_permission(role: Role, resource: Resource, action: Action, is_owner: bool) -> bool {
    permissions_for(role)
        .iter()
        .any(|p| p.resource == resource && p.action == action && (!p.own_only || is_owner))
}
