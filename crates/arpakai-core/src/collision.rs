//! Collision filtering between groups.
//!
//! Each entity carries a `CollisionFilter`: the group it belongs to and the
//! groups it wants contacts reported for. Which pairs actually reach the
//! gameplay layer is decided by the explicit `CONTACT_TABLE`.

use serde::{Deserialize, Serialize};

use crate::enums::CollisionGroup;

/// Explicit `(group, group) -> notify` table.
pub const CONTACT_TABLE: [(CollisionGroup, CollisionGroup, bool); 4] = [
    (CollisionGroup::Projectile, CollisionGroup::Target, true),
    (CollisionGroup::Target, CollisionGroup::Projectile, true),
    (CollisionGroup::Projectile, CollisionGroup::Projectile, false),
    (CollisionGroup::Target, CollisionGroup::Target, false),
];

/// Whether a contact between `a` and `b` may ever be reported.
pub fn should_notify(a: CollisionGroup, b: CollisionGroup) -> bool {
    CONTACT_TABLE
        .iter()
        .find(|(x, y, _)| *x == a && *y == b)
        .map(|(_, _, notify)| *notify)
        .unwrap_or(false)
}

/// Set of groups an entity wants contact reports for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMask {
    pub projectile: bool,
    pub target: bool,
}

impl ContactMask {
    pub const NONE: ContactMask = ContactMask {
        projectile: false,
        target: false,
    };

    pub fn only(group: CollisionGroup) -> Self {
        Self::NONE.with(group)
    }

    pub fn with(mut self, group: CollisionGroup) -> Self {
        match group {
            CollisionGroup::Projectile => self.projectile = true,
            CollisionGroup::Target => self.target = true,
        }
        self
    }

    pub fn contains(&self, group: CollisionGroup) -> bool {
        match group {
            CollisionGroup::Projectile => self.projectile,
            CollisionGroup::Target => self.target,
        }
    }
}

/// Group membership plus contact mask for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFilter {
    pub group: CollisionGroup,
    pub contact_mask: ContactMask,
}

impl CollisionFilter {
    /// The standard filter for a group: projectiles test against targets
    /// and targets test against projectiles.
    pub fn for_group(group: CollisionGroup) -> Self {
        let other = match group {
            CollisionGroup::Projectile => CollisionGroup::Target,
            CollisionGroup::Target => CollisionGroup::Projectile,
        };
        Self {
            group,
            contact_mask: ContactMask::only(other),
        }
    }

    /// A contact is reported when either side's mask names the other's group
    /// and the group pair is allowed by the contact table.
    pub fn reports_contact_with(&self, other: &CollisionFilter) -> bool {
        let masked =
            self.contact_mask.contains(other.group) || other.contact_mask.contains(self.group);
        masked && should_notify(self.group, other.group)
    }
}
