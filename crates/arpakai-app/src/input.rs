//! Line-based player input from stdin.
//!
//! `fire` (or an empty line) shoots, `aim x y z` turns the camera,
//! `lost` drops tracking, `quit` stops the round.

use std::io::BufRead;
use std::sync::mpsc;
use std::thread::JoinHandle;

use glam::Vec3;

use arpakai_core::commands::PlayerCommand;
use arpakai_core::enums::TrackingStatus;

use crate::state::GameLoopCommand;
use crate::tracking::ScriptedTracking;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Fire,
    Start,
    /// New camera forward direction.
    Aim(Vec3),
    LoseTracking,
    Quit,
}

pub fn parse_input_line(line: &str) -> Option<InputAction> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Some(InputAction::Fire);
    };
    match word.to_ascii_lowercase().as_str() {
        "f" | "fire" => Some(InputAction::Fire),
        "start" => Some(InputAction::Start),
        "lost" => Some(InputAction::LoseTracking),
        "q" | "quit" => Some(InputAction::Quit),
        "aim" => {
            let coords: Vec<f32> = words
                .map(|w| w.parse::<f32>().ok().filter(|v| v.is_finite()))
                .collect::<Option<_>>()?;
            match coords.as_slice() {
                [x, y, z] => {
                    let dir = Vec3::new(*x, *y, *z);
                    (dir.length_squared() > 0.0).then_some(InputAction::Aim(dir))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Carry out one action. Returns `false` when input should stop.
pub fn apply_input(
    action: InputAction,
    commands: &mpsc::Sender<GameLoopCommand>,
    tracking: &ScriptedTracking,
) -> bool {
    let command = match action {
        InputAction::Fire => GameLoopCommand::Player(PlayerCommand::Fire),
        InputAction::Start => GameLoopCommand::Player(PlayerCommand::StartRound),
        InputAction::Aim(forward) => {
            tracking.look(Vec3::ZERO, forward);
            return true;
        }
        InputAction::LoseTracking => {
            tracking.clear_pose(TrackingStatus::Interrupted);
            return true;
        }
        InputAction::Quit => GameLoopCommand::Shutdown,
    };
    commands.send(command).is_ok() && action != InputAction::Quit
}

/// Read stdin on a background thread until EOF, `quit`, or the loop exits.
pub fn spawn_stdin_reader(
    commands: mpsc::Sender<GameLoopCommand>,
    tracking: ScriptedTracking,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("arpakai-input".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match parse_input_line(&line) {
                    Some(action) => {
                        if !apply_input(action, &commands, &tracking) {
                            break;
                        }
                    }
                    None => log::warn!("Unrecognised input: {:?}", line),
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpakai_sim::ports::TrackingSession;

    #[test]
    fn test_parse_fire() {
        assert_eq!(parse_input_line(""), Some(InputAction::Fire));
        assert_eq!(parse_input_line("  f "), Some(InputAction::Fire));
        assert_eq!(parse_input_line("FIRE"), Some(InputAction::Fire));
    }

    #[test]
    fn test_parse_aim() {
        assert_eq!(
            parse_input_line("aim 0 1 -1"),
            Some(InputAction::Aim(Vec3::new(0.0, 1.0, -1.0)))
        );
        assert_eq!(parse_input_line("aim 0 0 0"), None);
        assert_eq!(parse_input_line("aim 1 2"), None);
        assert_eq!(parse_input_line("aim a b c"), None);
        assert_eq!(parse_input_line("aim NaN 0 1"), None);
        assert_eq!(parse_input_line("aim 0 inf 0"), None);
        assert_eq!(
            parse_input_line("aim 0 -1 0"),
            Some(InputAction::Aim(Vec3::NEG_Y))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_input_line("jump"), None);
        assert_eq!(parse_input_line("quit"), Some(InputAction::Quit));
    }

    #[test]
    fn test_apply_fire_and_quit() {
        let (tx, rx) = mpsc::channel();
        let tracking = ScriptedTracking::new();

        assert!(apply_input(InputAction::Fire, &tx, &tracking));
        assert!(!apply_input(InputAction::Quit, &tx, &tracking));

        let sent: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            sent,
            vec![
                GameLoopCommand::Player(PlayerCommand::Fire),
                GameLoopCommand::Shutdown
            ]
        );
    }

    #[test]
    fn test_apply_aim_updates_tracking() {
        let (tx, rx) = mpsc::channel();
        let mut tracking = ScriptedTracking::new();
        tracking.start();

        apply_input(InputAction::Aim(Vec3::X), &tx, &tracking);
        let pose = tracking.current_camera_pose().unwrap();
        assert!((-pose.matrix.z_axis.truncate() - Vec3::X).length() < 1e-5);

        apply_input(InputAction::LoseTracking, &tx, &tracking);
        assert!(tracking.current_camera_pose().is_none());
        assert!(rx.try_recv().is_err());
    }
}
