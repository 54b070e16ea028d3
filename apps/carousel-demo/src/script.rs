//! Line-based replay scripts.
//!
//! ```text
//! touch down 150 100     # device, phase, client x, client y
//! mouse move 170 100
//! wait 300               # advance the clock by 300ms
//! next | prev | goto 3   # control surface
//! ```

use anyhow::{anyhow, bail, Context, Result};
use glide_foundation::PointerEventKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Pointer {
        device: Device,
        kind: PointerEventKind,
        x: f64,
        y: f64,
    },
    Wait(u64),
    Next,
    Prev,
    Goto(usize),
}

pub fn parse(source: &str) -> Result<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((number + 1, line))
        })
        .map(|(number, line)| parse_line(line).with_context(|| format!("line {number}: {line}")))
        .collect()
}

fn parse_line(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["next"] => Ok(Command::Next),
        ["prev"] => Ok(Command::Prev),
        ["goto", index] => Ok(Command::Goto(index.parse()?)),
        ["wait", millis] => Ok(Command::Wait(millis.parse()?)),
        [device, phase, x, y] => Ok(Command::Pointer {
            device: parse_device(device)?,
            kind: parse_phase(phase)?,
            x: x.parse()?,
            y: y.parse()?,
        }),
        _ => bail!("unrecognized command"),
    }
}

fn parse_device(word: &str) -> Result<Device> {
    match word {
        "mouse" => Ok(Device::Mouse),
        "touch" => Ok(Device::Touch),
        other => Err(anyhow!("unknown device {other:?}")),
    }
}

fn parse_phase(word: &str) -> Result<PointerEventKind> {
    match word {
        "down" => Ok(PointerEventKind::Down),
        "move" => Ok(PointerEventKind::Move),
        "up" => Ok(PointerEventKind::Up),
        "cancel" => Ok(PointerEventKind::Cancel),
        other => Err(anyhow!("unknown phase {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_and_control_commands() {
        let commands = parse("touch down 1 2\n# comment\n\nwait 5 # trailing\ngoto 3\nnext\n")
            .expect("valid script");
        assert_eq!(
            commands,
            vec![
                Command::Pointer {
                    device: Device::Touch,
                    kind: PointerEventKind::Down,
                    x: 1.0,
                    y: 2.0,
                },
                Command::Wait(5),
                Command::Goto(3),
                Command::Next,
            ]
        );
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse("next\npen down 1 2\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
