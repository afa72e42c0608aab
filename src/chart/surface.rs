//! Rendering surfaces and the owned chart handle

use super::spec::ChartSpec;
use crate::error::SimResult;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Owned handle to a chart drawn on a surface.
///
/// Not `Clone`: whoever holds the handle is responsible for passing it back to
/// [`ChartSurface::destroy`] before the next chart is created.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
}

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Something that can draw a [`ChartSpec`]
pub trait ChartSurface {
    /// Draw a new chart and return its handle
    fn render(&mut self, spec: &ChartSpec) -> SimResult<ChartHandle>;

    /// Tear down a previously drawn chart
    fn destroy(&mut self, handle: ChartHandle) -> SimResult<()>;
}

impl<T: ChartSurface + ?Sized> ChartSurface for Box<T> {
    fn render(&mut self, spec: &ChartSpec) -> SimResult<ChartHandle> {
        (**self).render(spec)
    }

    fn destroy(&mut self, handle: ChartHandle) -> SimResult<()> {
        (**self).destroy(handle)
    }
}

/// Replace the previous chart (if any) with a freshly built one.
///
/// The previous chart is destroyed wholesale before the new one is created.
pub fn redraw<S: ChartSurface + ?Sized>(
    surface: &mut S,
    previous: Option<ChartHandle>,
    spec: &ChartSpec,
) -> SimResult<ChartHandle> {
    if let Some(handle) = previous {
        log::debug!("destroying chart {}", handle.id());
        surface.destroy(handle)?;
    }
    let handle = surface.render(spec)?;
    log::debug!("rendered chart {}", handle.id());
    Ok(handle)
}

/// Keeps rendered charts in memory
#[derive(Debug, Default)]
pub struct MemorySurface {
    next_id: u64,
    live: BTreeMap<u64, ChartSpec>,
    destroyed: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec of a live chart
    pub fn get(&self, handle: &ChartHandle) -> Option<&ChartSpec> {
        self.live.get(&handle.id)
    }

    /// Number of charts currently drawn
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of charts torn down so far
    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }
}

impl ChartSurface for MemorySurface {
    fn render(&mut self, spec: &ChartSpec) -> SimResult<ChartHandle> {
        self.next_id += 1;
        self.live.insert(self.next_id, spec.clone());
        Ok(ChartHandle::new(self.next_id))
    }

    fn destroy(&mut self, handle: ChartHandle) -> SimResult<()> {
        if self.live.remove(&handle.id).is_some() {
            self.destroyed += 1;
        }
        Ok(())
    }
}

/// Writes each chart as pretty JSON to a fixed path.
///
/// The file holds the chart currently on display; destroying the chart
/// removes it.
#[derive(Debug)]
pub struct JsonFileSurface {
    path: PathBuf,
    next_id: u64,
}

impl JsonFileSurface {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            next_id: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSurface for JsonFileSurface {
    fn render(&mut self, spec: &ChartSpec) -> SimResult<ChartHandle> {
        let json = serde_json::to_string_pretty(spec)?;
        std::fs::write(&self.path, json)?;
        log::info!("chart written to {}", self.path.display());

        self.next_id += 1;
        Ok(ChartHandle::new(self.next_id))
    }

    fn destroy(&mut self, _handle: ChartHandle) -> SimResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ScenarioParameters;
    use crate::projection::project;

    fn spec() -> ChartSpec {
        let series = project(&ScenarioParameters::default_pricing());
        ChartSpec::build(&series, &series)
    }

    #[test]
    fn test_redraw_destroys_previous() {
        let mut surface = MemorySurface::new();
        let spec = spec();

        let first = redraw(&mut surface, None, &spec).unwrap();
        assert_eq!(surface.live_count(), 1);

        let second = redraw(&mut surface, Some(first), &spec).unwrap();
        assert_eq!(surface.live_count(), 1);
        assert_eq!(surface.destroyed_count(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(surface.get(&second), Some(&spec));
    }

    #[test]
    fn test_json_surface_round_trip() {
        let path = std::env::temp_dir().join("telecom_economics_chart_test.json");
        let mut surface = JsonFileSurface::new(&path);

        let handle = redraw(&mut surface, None, &spec()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["labels"][23], "Month 24");

        surface.destroy(handle).unwrap();
        assert!(!path.exists());
    }
}
