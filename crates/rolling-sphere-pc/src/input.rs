//! Scripted input for the headless PC host.
//!
//! A script is a whitespace-separated list of steps:
//!
//! * `right`, `left`, `middle`: mouse button press
//! * `menu:<name>:<entry>`: pop-up menu selection, e.g. `menu:fog:2`
//! * `resize:<width>x<height>`: window reshape
//! * `wait:<frames>`: deliver nothing for that many frames
//! * anything else: one key press per character, e.g. `bXX`

use std::collections::VecDeque;

use anyhow::{anyhow, bail, Context};
use rolling_sphere_hal::{InputEvent, InputSource, MenuKind, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Event(InputEvent),
    Wait(u32),
}

/// Replays a parsed script, a few events per frame.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: VecDeque<Step>,
}

impl ScriptedInput {
    pub fn parse(script: &str) -> anyhow::Result<Self> {
        let mut steps = VecDeque::new();
        for token in script.split_whitespace() {
            parse_token(token, &mut steps).with_context(|| format!("bad script step {token:?}"))?;
        }
        Ok(Self { steps })
    }

    /// Steps not yet delivered.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

fn parse_token(token: &str, steps: &mut VecDeque<Step>) -> anyhow::Result<()> {
    match token {
        "right" => steps.push_back(Step::Event(InputEvent::MouseDown(MouseButton::Right))),
        "left" => steps.push_back(Step::Event(InputEvent::MouseDown(MouseButton::Left))),
        "middle" => steps.push_back(Step::Event(InputEvent::MouseDown(MouseButton::Middle))),
        _ => {
            if let Some(rest) = token.strip_prefix("menu:") {
                let (name, entry) = rest
                    .split_once(':')
                    .ok_or_else(|| anyhow!("expected menu:<name>:<entry>"))?;
                let menu = menu_kind(name)?;
                let entry: u8 = entry.parse().context("menu entry must be a small integer")?;
                steps.push_back(Step::Event(InputEvent::Menu { menu, entry }));
            } else if let Some(rest) = token.strip_prefix("resize:") {
                let (w, h) = rest
                    .split_once('x')
                    .ok_or_else(|| anyhow!("expected resize:<width>x<height>"))?;
                let width = w.parse().context("bad width")?;
                let height = h.parse().context("bad height")?;
                steps.push_back(Step::Event(InputEvent::Resize { width, height }));
            } else if let Some(rest) = token.strip_prefix("wait:") {
                steps.push_back(Step::Wait(rest.parse().context("bad frame count")?));
            } else {
                steps.extend(token.chars().map(|c| Step::Event(InputEvent::Key(c))));
            }
        }
    }
    Ok(())
}

fn menu_kind(name: &str) -> anyhow::Result<MenuKind> {
    let kind = match name {
        "main" => MenuKind::Main,
        "shadow" => MenuKind::Shadow,
        "blending" => MenuKind::ShadowBlending,
        "ground" => MenuKind::GroundTexture,
        "sphere-texture" => MenuKind::SphereTexture,
        "firework" => MenuKind::Firework,
        "lighting" => MenuKind::Lighting,
        "shading" => MenuKind::Shading,
        "light-source" => MenuKind::LightSource,
        "fog" => MenuKind::Fog,
        other => bail!("unknown menu {other:?}"),
    };
    Ok(kind)
}

impl InputSource for ScriptedInput {
    fn init(&mut self) {
        log::info!("Scripted input initialized ({} steps)", self.steps.len());
    }

    fn poll(&mut self) -> Option<InputEvent> {
        loop {
            match self.steps.front_mut()? {
                Step::Wait(0) => {
                    self.steps.pop_front();
                }
                Step::Wait(n) => {
                    *n -= 1;
                    return None;
                }
                Step::Event(event) => {
                    let event = *event;
                    self.steps.pop_front();
                    return Some(event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(input: &mut ScriptedInput) -> Vec<InputEvent> {
        std::iter::from_fn(|| input.poll()).collect()
    }

    #[test]
    fn keys_expand_per_character() {
        let mut input = ScriptedInput::parse("bXy").unwrap();
        assert_eq!(
            drain(&mut input),
            vec![
                InputEvent::Key('b'),
                InputEvent::Key('X'),
                InputEvent::Key('y')
            ]
        );
    }

    #[test]
    fn mouse_menu_and_resize() {
        let mut input = ScriptedInput::parse("right menu:fog:3 resize:800x600").unwrap();
        assert_eq!(
            drain(&mut input),
            vec![
                InputEvent::MouseDown(MouseButton::Right),
                InputEvent::Menu {
                    menu: MenuKind::Fog,
                    entry: 3
                },
                InputEvent::Resize {
                    width: 800,
                    height: 600
                },
            ]
        );
    }

    #[test]
    fn wait_holds_back_later_steps() {
        let mut input = ScriptedInput::parse("b wait:2 right").unwrap();
        assert_eq!(drain(&mut input), vec![InputEvent::Key('b')]);
        assert_eq!(drain(&mut input), vec![]);
        assert_eq!(
            drain(&mut input),
            vec![InputEvent::MouseDown(MouseButton::Right)]
        );
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn bad_steps_are_rejected() {
        assert!(ScriptedInput::parse("menu:nope:1").is_err());
        assert!(ScriptedInput::parse("menu:fog").is_err());
        assert!(ScriptedInput::parse("resize:80").is_err());
        assert!(ScriptedInput::parse("wait:-1").is_err());
    }
}
