//! Input sources that drive a session without a window.
//!
//! A script is a RON list of frames:
//!
//! ```ron
//! [
//!     (elapsed_ms: 16, actions: [confirm]),
//!     (elapsed_ms: 200, movement: (x: 1.0, y: 0.0)),
//! ]
//! ```
//!
//! Interactive mode reads one command per stdin line instead; see
//! [`parse_command`].

use std::path::Path;

use anyhow::{Context, Result, bail};
use scene_runtime::{FrameInput, InputAction};
use school_core::Vec2;

/// Frame length used by interactive commands that do not name one.
pub const DEFAULT_FRAME_MS: u32 = 16;

pub fn load_script(path: &Path) -> Result<Vec<FrameInput>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Failed to parse script {}", path.display()))
}

pub fn parse_script(content: &str) -> Result<Vec<FrameInput>> {
    Ok(ron::from_str(content)?)
}

/// What one line of interactive input asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Frame(FrameInput),
    Quit,
}

/// Parses an interactive command.
///
/// - a key name (`space`, `b`, `up`, `down`, `l`, `m`) presses that key
/// - `walk <dx> <dy> [ms]` moves for the given time
/// - `wait [ms]` lets time pass
/// - `quit` ends the session
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Frame(FrameInput::idle(DEFAULT_FRAME_MS)));
    };

    let frame = match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Command::Quit),
        "walk" => {
            let dx: f32 = next_number(&mut words, "walk needs <dx> <dy>")?;
            let dy: f32 = next_number(&mut words, "walk needs <dx> <dy>")?;
            let ms = words.next().map(str::parse).transpose()?.unwrap_or(DEFAULT_FRAME_MS);
            FrameInput::walk(ms, Vec2::new(dx, dy))
        }
        "wait" => {
            let ms = words.next().map(str::parse).transpose()?.unwrap_or(DEFAULT_FRAME_MS);
            FrameInput::idle(ms)
        }
        key => match InputAction::from_key(key) {
            Some(action) => FrameInput::press(action),
            None => bail!("unknown command '{key}'"),
        },
    };
    Ok(Command::Frame(frame))
}

fn next_number<'a, T>(words: &mut impl Iterator<Item = &'a str>, message: &'static str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let word = words.next().context(message)?;
    Ok(word.parse()?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_script_frames() {
        let frames = parse_script(
            r#"[
                (elapsed_ms: 16, actions: [confirm]),
                (elapsed_ms: 200, movement: (x: 1.0, y: 0.0)),
            ]"#,
        )
        .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].actions, vec![InputAction::Confirm]);
        assert_eq!(frames[1].movement, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn loads_script_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[(elapsed_ms: 5)]").unwrap();
        let frames = load_script(file.path()).unwrap();
        assert_eq!(frames, vec![FrameInput::idle(5)]);
    }

    #[test]
    fn parses_interactive_commands() {
        assert_eq!(
            parse_command("space").unwrap(),
            Command::Frame(FrameInput::press(InputAction::Confirm))
        );
        assert_eq!(
            parse_command("walk 1 0 200").unwrap(),
            Command::Frame(FrameInput::walk(200, Vec2::new(1.0, 0.0)))
        );
        assert_eq!(parse_command("wait").unwrap(), Command::Frame(FrameInput::idle(16)));
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert!(parse_command("walk 1").is_err());
        assert!(parse_command("dance").is_err());
    }
}
