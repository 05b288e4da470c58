//! Per-frame simulation step
//!
//! One call per rendered frame. Never fails once the population exists.

use super::canvas::Canvas;
use super::state::Population;
use crate::palette::NamedColor;

/// Advance every ball one frame and draw it
pub fn step_frame<C: Canvas + ?Sized>(population: &mut Population, canvas: &mut C) {
    population.step(canvas);
}

/// Clear the canvas, then step. This is the body of one rendered frame.
pub fn draw_frame<C: Canvas + ?Sized>(
    population: &mut Population,
    canvas: &mut C,
    background: NamedColor,
) {
    canvas.clear(background);
    step_frame(population, canvas);
}

/// Clear the canvas and draw every ball where it stands, without stepping.
/// Used when the window needs repainting between scheduled frames.
pub fn present_frame<C: Canvas + ?Sized>(
    population: &Population,
    canvas: &mut C,
    background: NamedColor,
) {
    canvas.clear(background);
    population.render(canvas);
}
