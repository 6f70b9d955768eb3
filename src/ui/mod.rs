// SPDX-License-Identifier: MPL-2.0
//! Rendering layer: design tokens, styles, and the drawn panels.
//!
//! Nothing under `ui` owns page state; every module here renders from
//! references handed down by the application view.

pub mod confetti;
pub mod design_tokens;
pub mod map;
pub mod styles;
pub mod theming;
