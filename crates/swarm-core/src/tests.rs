#[cfg(test)]
mod tests {
    use crate::commands::EngineCommand;
    use crate::config::EngineConfig;
    use crate::enums::*;
    use crate::events::TargetEvent;
    use crate::state::{AgentView, EngineSnapshot};
    use crate::types::{EngineTime, FrameSize, Target, TargetId, Vec2};

    #[test]
    fn test_vec2_length_and_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((b.length() - 5.0).abs() < 1e-10);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_vec2_normalized_zero_safe() {
        let zero = Vec2::ZERO.normalized();
        assert_eq!(zero, Vec2::ZERO);

        let unit = Vec2::new(10.0, 0.0).normalized();
        assert!((unit.x - 1.0).abs() < 1e-10);
        assert_eq!(unit.y, 0.0);
    }

    #[test]
    fn test_vec2_clamped_length() {
        let v = Vec2::new(30.0, 40.0);
        let clamped = v.clamped_length(5.0);
        assert!((clamped.length() - 5.0).abs() < 1e-10);

        let short = Vec2::new(1.0, 0.0).clamped_length(5.0);
        assert_eq!(short, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_frame_size_scaling() {
        let video = FrameSize::new(640.0, 480.0);
        let canvas = FrameSize::new(1280.0, 720.0);
        let (sx, sy) = video.scale_to(canvas);
        assert!((sx - 2.0).abs() < 1e-10);
        assert!((sy - 1.5).abs() < 1e-10);

        let (ux, uy) = FrameSize::unit().scale_to(canvas);
        assert_eq!(ux, 1280.0);
        assert_eq!(uy, 720.0);
    }

    #[test]
    fn test_target_id_geometry_stable() {
        let a = TargetId::from_geometry(10.0, 20.0, 100.0, 50.0);
        let b = TargetId::from_geometry(10.2, 19.9, 100.4, 49.8);
        // Rounds to the same integers -> same identity.
        assert_eq!(a, b);

        let moved = TargetId::from_geometry(11.0, 20.0, 100.0, 50.0);
        assert_ne!(a, moved);
    }

    #[test]
    fn test_target_id_raw_vs_geometry() {
        assert_eq!(TargetId::from_raw(7), TargetId(7));
        assert_ne!(
            TargetId::from_point(3.0, 4.0),
            TargetId::from_point(4.0, 3.0)
        );
    }

    #[test]
    fn test_perimeter_walk_edge_order() {
        // 100x50 box centered at (50, 25): top-left corner at origin.
        let target = Target::boxed(
            TargetId::from_raw(1),
            Vec2::new(50.0, 25.0),
            Vec2::new(100.0, 50.0),
        );
        assert!((target.perimeter() - 300.0).abs() < 1e-10);

        // Top edge start and interior.
        assert_eq!(target.perimeter_point(0.0), Vec2::new(0.0, 0.0));
        assert_eq!(target.perimeter_point(60.0), Vec2::new(60.0, 0.0));
        // Right edge (starts at s = 100).
        assert_eq!(target.perimeter_point(120.0), Vec2::new(100.0, 20.0));
        // Bottom edge walks right-to-left (starts at s = 150).
        assert_eq!(target.perimeter_point(170.0), Vec2::new(80.0, 50.0));
        // Left edge walks bottom-to-top (starts at s = 250).
        assert_eq!(target.perimeter_point(280.0), Vec2::new(0.0, 20.0));
        // Wraps.
        assert_eq!(target.perimeter_point(300.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_perimeter_point_for_point_target() {
        let target = Target::point(TargetId::from_raw(2), Vec2::new(5.0, 6.0));
        assert_eq!(target.perimeter(), 0.0);
        assert_eq!(target.perimeter_point(37.5), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_engine_time_advance() {
        let mut time = EngineTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.agent_count, 15);
        assert_eq!(config.assignment_policy, AssignmentPolicy::OneToOne);
        assert_eq!(config.boundary_mode, BoundaryMode::Clamp);
        assert_eq!(config.pursuit_mode, PursuitMode::BoundedStep);
        assert_eq!(
            config.modality_priority,
            vec![
                Modality::Hand,
                Modality::Pose,
                Modality::Object,
                Modality::Color
            ]
        );
        assert!((config.max_dt - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_config_partial_json() {
        let config = EngineConfig::from_json(
            r#"{"agent_count": 25, "assignment_policy": "Perimeter", "max_agents_per_target": 8}"#,
        )
        .unwrap();
        assert_eq!(config.agent_count, 25);
        assert_eq!(config.assignment_policy, AssignmentPolicy::Perimeter);
        assert_eq!(config.max_agents_per_target, 8);
        // Unspecified fields take defaults.
        assert_eq!(config.speed, crate::constants::DEFAULT_SPEED);
    }

    #[test]
    fn test_config_sanitized_repairs_degenerate_values() {
        let mut config = EngineConfig {
            agent_count: 0,
            agent_size_min: 100.0,
            agent_size_max: 40.0,
            max_dt: f64::NAN,
            ..Default::default()
        };
        config.canvas = FrameSize::new(-1.0, 0.0);
        let fixed = config.sanitized();
        assert_eq!(fixed.agent_count, 1);
        assert!(fixed.agent_size_min <= fixed.agent_size_max);
        assert!((fixed.max_dt - crate::constants::DEFAULT_MAX_DT).abs() < 1e-12);
        assert!(fixed.canvas.width > 0.0 && fixed.canvas.height > 0.0);
    }

    #[test]
    fn test_engine_command_serde() {
        let commands = vec![
            EngineCommand::SetCanvasSize {
                width: 800.0,
                height: 600.0,
            },
            EngineCommand::SetAssignmentPolicy {
                policy: AssignmentPolicy::Nearest,
            },
            EngineCommand::SetModalityPriority {
                priority: vec![Modality::Object, Modality::Hand],
            },
            EngineCommand::SetBoundaryMode {
                mode: BoundaryMode::Reflect,
            },
            EngineCommand::ScatterAgents,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: EngineCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_target_event_serde() {
        let events = vec![
            TargetEvent::TargetAppeared {
                modality: Modality::Object,
                id: TargetId(9),
            },
            TargetEvent::TargetLost {
                modality: Modality::Hand,
                id: TargetId(3),
            },
            TargetEvent::ModalityChanged {
                from: Some(Modality::Object),
                to: None,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: TargetEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = EngineSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_agent_view_center() {
        let view = AgentView {
            index: 0,
            position: Vec2::new(10.0, 20.0),
            size: Vec2::new(40.0, 60.0),
            visible: true,
            bound_target: None,
        };
        assert_eq!(view.center(), Vec2::new(30.0, 50.0));
    }
}
