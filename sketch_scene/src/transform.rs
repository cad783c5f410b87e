// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The handle being dragged while an element is transformed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransformHandle {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
    /// The rotation handle.
    Rotation,
}

impl TransformHandle {
    /// Whether dragging this handle can only change the height.
    pub fn is_vertical_only(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Parses the short handle names used by editors (`"n"`, `"se"`, `"rotation"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "n" => Self::North,
            "s" => Self::South,
            "e" => Self::East,
            "w" => Self::West,
            "ne" => Self::NorthEast,
            "nw" => Self::NorthWest,
            "se" => Self::SouthEast,
            "sw" => Self::SouthWest,
            "rotation" => Self::Rotation,
            _ => return None,
        })
    }
}
