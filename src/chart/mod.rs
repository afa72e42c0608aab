//! Chart specification and rendering surfaces

mod spec;
mod surface;

pub use spec::{
    tooltip_label, ChartSpec, Dataset, XAxis, YAxis, CURRENT_BORDER_COLOR, LINE_TENSION,
    NEW_BORDER_COLOR, Y_BUFFER_FRACTION,
};
pub use surface::{redraw, ChartHandle, ChartSurface, JsonFileSurface, MemorySurface};
