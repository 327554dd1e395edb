/// User intents a renderer forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    Previous,          // Left arrow clicked
    Next,              // Right arrow clicked
    DotSelect(usize),  // Dot indicator clicked
    ToggleAutoPlay,    // Play/pause button clicked
    PointerEnter,      // Pointer moved over the slider
    PointerLeave,      // Pointer left the slider
}
