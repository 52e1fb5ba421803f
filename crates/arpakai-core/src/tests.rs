#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use crate::collision::{should_notify, CollisionFilter, ContactMask};
    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, RoundConfig};
    use crate::enums::*;
    use crate::events::{ContactBody, ContactEvent, GameEvent};
    use crate::state::{RoundSnapshot, RoundState};
    use crate::types::{CameraPose, EntityId, Spin, SpawnBounds};

    // ---- Collision filtering ----

    #[test]
    fn test_contact_table_only_projectile_target() {
        use CollisionGroup::*;
        assert!(should_notify(Projectile, Target));
        assert!(should_notify(Target, Projectile));
        assert!(!should_notify(Projectile, Projectile));
        assert!(!should_notify(Target, Target));
    }

    #[test]
    fn test_standard_filters() {
        let projectile = CollisionFilter::for_group(CollisionGroup::Projectile);
        let target = CollisionFilter::for_group(CollisionGroup::Target);

        assert!(projectile.contact_mask.contains(CollisionGroup::Target));
        assert!(!projectile.contact_mask.contains(CollisionGroup::Projectile));
        assert!(target.contact_mask.contains(CollisionGroup::Projectile));

        assert!(projectile.reports_contact_with(&target));
        assert!(target.reports_contact_with(&projectile));
        assert!(!projectile.reports_contact_with(&projectile));
        assert!(!target.reports_contact_with(&target));
    }

    #[test]
    fn test_table_overrides_permissive_mask() {
        // Even a target that asks for target contacts never gets them.
        let greedy = CollisionFilter {
            group: CollisionGroup::Target,
            contact_mask: ContactMask::NONE
                .with(CollisionGroup::Target)
                .with(CollisionGroup::Projectile),
        };
        assert!(!greedy.reports_contact_with(&greedy));
    }

    #[test]
    fn test_empty_masks_report_nothing() {
        let mute_projectile = CollisionFilter {
            group: CollisionGroup::Projectile,
            contact_mask: ContactMask::NONE,
        };
        let mute_target = CollisionFilter {
            group: CollisionGroup::Target,
            contact_mask: ContactMask::NONE,
        };
        assert!(!mute_projectile.reports_contact_with(&mute_target));
    }

    #[test]
    fn test_kind_groups() {
        assert_eq!(
            EntityKind::Projectile.collision_group(),
            CollisionGroup::Projectile
        );
        assert_eq!(
            EntityKind::SimpleTarget.collision_group(),
            CollisionGroup::Target
        );
        assert_eq!(
            EntityKind::BonusTarget.collision_group(),
            CollisionGroup::Target
        );
        assert!(!EntityKind::Projectile.is_target());
    }

    #[test]
    fn test_contact_event_involves_target() {
        let p = ContactBody::new(EntityId(1), EntityKind::Projectile);
        let t = ContactBody::new(EntityId(2), EntityKind::BonusTarget);
        assert!(ContactEvent::new(p, t).involves_target());
        assert!(!ContactEvent::new(p, p).involves_target());
    }

    // ---- Types ----

    #[test]
    fn test_spawn_bounds_contains_edges() {
        let bounds = SpawnBounds::new(Vec3::new(-5.0, -4.0, -5.0), Vec3::new(10.0, 5.0, 10.0));
        assert!(bounds.contains(Vec3::new(-5.0, -4.0, -5.0)));
        assert!(bounds.contains(Vec3::new(10.0, 5.0, 10.0)));
        assert!(!bounds.contains(Vec3::new(10.1, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, -4.5, 0.0)));
    }

    #[test]
    fn test_spin_full_revolution_per_period() {
        let spin = Spin {
            axis: Vec3::Y,
            period_secs: 1.0,
        };
        assert!((spin.angular_speed() - std::f32::consts::TAU).abs() < 1e-6);

        let frozen = Spin {
            axis: Vec3::Y,
            period_secs: 0.0,
        };
        assert_eq!(frozen.angular_speed(), 0.0);
    }

    #[test]
    fn test_camera_pose_looking_to() {
        let pose = CameraPose::looking_to(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        let m: Mat4 = pose.matrix;
        // Backward axis points opposite to where the camera looks.
        assert!((m.z_axis.truncate() - Vec3::NEG_X).length() < 1e-5);
        assert!((m.w_axis.truncate() - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_pose_looking_straight_up_and_down() {
        for forward in [Vec3::Y, Vec3::NEG_Y, Vec3::new(0.0, 4.0, 0.0), Vec3::Z] {
            let m = CameraPose::looking_to(Vec3::new(0.0, 50.0, 0.0), forward).matrix;
            assert!(m.is_finite(), "non-finite pose for {forward}");
            let look = -m.z_axis.truncate();
            assert!((look - forward.normalize()).length() < 1e-5, "{look} vs {forward}");
        }
    }

    #[test]
    fn test_camera_pose_degenerate_forward_stays_at_rest() {
        for forward in [Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0), Vec3::splat(f32::INFINITY)] {
            let m = CameraPose::looking_to(Vec3::ONE, forward).matrix;
            assert!(m.is_finite());
            assert!((-m.z_axis.truncate() - Vec3::NEG_Z).length() < 1e-5);
        }
    }

    // ---- Round state ----

    #[test]
    fn test_round_state_defaults() {
        let state = RoundState::default();
        assert_eq!(state.phase, RoundPhase::NotStarted);
        assert!(!state.is_running());

        let running = RoundState::running(30);
        assert_eq!(running.score, 0);
        assert_eq!(running.seconds_remaining, 30);
        assert!(running.is_running());
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.target_count, 100);
        assert_eq!(config.round_seconds, 30);
        assert_eq!(config.bonus_points, 5);
        assert_eq!(config.fire_impulse_scale, 2.0);
        assert_eq!(config.spawn_bounds.min, Vec3::new(-5.0, -4.0, -5.0));
        assert_eq!(config.spawn_bounds.max, Vec3::new(10.0, 5.0, 10.0));
    }

    #[test]
    fn test_config_partial_json_keeps_defaults() {
        let config = RoundConfig::from_json_str(r#"{ "seed": 7, "round_seconds": 10 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.round_seconds, 10);
        assert_eq!(config.target_count, 100);
    }

    #[test]
    fn test_config_rejects_inverted_bounds() {
        let json = r#"{ "spawn_bounds": { "min": [1.0, 0.0, 0.0], "max": [0.0, 1.0, 1.0] } }"#;
        let err = RoundConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
    }

    #[test]
    fn test_config_rejects_non_positive_impulse() {
        let err = RoundConfig::from_json_str(r#"{ "fire_impulse_scale": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_reports_parse_errors() {
        let err = RoundConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = RoundConfig::load("/definitely/not/here/arpakai.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Serde (wire shapes the display layer depends on) ----

    #[test]
    fn test_player_command_tagged() {
        let json = serde_json::to_string(&PlayerCommand::Fire).unwrap();
        assert_eq!(json, r#"{"type":"Fire"}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartRound"}"#).unwrap();
        assert_eq!(back, PlayerCommand::StartRound);
    }

    #[test]
    fn test_game_event_tagged() {
        let json = serde_json::to_string(&GameEvent::ScoreChanged { score: 15 }).unwrap();
        assert_eq!(json, r#"{"type":"ScoreChanged","score":15}"#);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = RoundSnapshot {
            phase: RoundPhase::Running,
            score: 10,
            seconds_remaining: 12,
            targets_remaining: 80,
            bonus_targets_remaining: 8,
            projectiles_fired: 25,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RoundSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
