use std::time::Duration;

use tracing::warn;

use crate::controller::SliderController;
use crate::events::SliderEvent;
use crate::view::SliderView;

/// Presentation side of a slider: paints views and reports user input.
pub trait Renderer {
    type Error;

    /// `false` once the host surface has been closed.
    fn is_open(&self) -> bool;
    /// Wall-clock time covered by the frame about to be drawn.
    fn frame_time(&self) -> Duration;
    fn poll_events(&mut self) -> Vec<SliderEvent>;
    fn render_frame(&mut self, view: &SliderView<'_>, dt: Duration) -> Result<(), Self::Error>;
}

/// Drives `controller` with `renderer` until the renderer closes.
///
/// Each frame forwards pending input, advances the slider clock, then paints.
pub fn run<R: Renderer>(
    controller: &mut SliderController,
    renderer: &mut R,
) -> Result<(), R::Error> {
    while renderer.is_open() {
        let dt = renderer.frame_time();

        for event in renderer.poll_events() {
            if let Err(e) = controller.handle(event) {
                warn!(?event, "dropping renderer event: {e}");
            }
        }

        controller.update(dt);
        renderer.render_frame(&controller.view(), dt)?;
    }
    Ok(())
}
