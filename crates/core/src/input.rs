use crate::Point;
use anyhow::{anyhow, Context};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumString;

/// The two kinds of touch that a cube responds to. On a mouse, these are the
/// left and right buttons.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    /// Play a transformation on the touched cube
    #[display(fmt = "primary")]
    #[strum(serialize = "primary", serialize = "left")]
    #[serde(alias = "left")]
    Primary,

    /// Put the touched cube back the way it was drawn
    #[display(fmt = "secondary")]
    #[strum(serialize = "secondary", serialize = "right")]
    #[serde(alias = "right")]
    Secondary,
}

/// A touch at a specific point on the canvas, in canvas coordinates (y-up).
///
/// Events can be parsed from strings of the form `action@x,y`, e.g.
/// `primary@170,20` or `right@12.5,-3`.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "{}@{},{}", action, "point.x", "point.y")]
pub struct TouchEvent {
    pub action: TouchAction,
    pub point: Point,
}

impl TouchEvent {
    pub fn new(action: TouchAction, point: Point) -> Self {
        Self { action, point }
    }
}

impl FromStr for TouchEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, coords) = s.split_once('@').ok_or_else(|| {
            anyhow!("expected touch of the form action@x,y, got {:?}", s)
        })?;
        let (x, y) = coords.split_once(',').ok_or_else(|| {
            anyhow!("expected coordinates of the form x,y, got {:?}", coords)
        })?;

        let action: TouchAction = action
            .trim()
            .parse()
            .with_context(|| format!("invalid touch action {:?}", action))?;
        let x: f64 = x
            .trim()
            .parse()
            .with_context(|| format!("invalid x coordinate {:?}", x))?;
        let y: f64 = y
            .trim()
            .parse()
            .with_context(|| format!("invalid y coordinate {:?}", y))?;
        Ok(Self::new(action, Point::new(x, y)))
    }
}
