//! WebAssembly bindings for Torus Life.
//!
//! Provides a thin wrapper around `Simulation` for browser environments. The
//! host page owns the timer: it calls [`WasmSimulation::tick`] on its own
//! interval and repaints from the flat cell view.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    control::Simulation,
    engine::GridStats,
    schema::{GameConfig, Seed, Viewport, index_to_cell},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// WebAssembly wrapper for an interactive Life session.
#[wasm_bindgen]
pub struct WasmSimulation {
    simulation: Simulation,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Create a new session from JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing GameConfig
    /// * `seed_json` - JSON string containing Seed
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed_json: &str) -> Result<WasmSimulation, JsValue> {
        let config: GameConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;

        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;

        let simulation = Simulation::with_seed(&config, &seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;

        Ok(WasmSimulation { simulation })
    }

    /// Create a session sized to fill a pixel surface, all cells dead.
    ///
    /// Rows and columns are floor-divided from the surface dimensions, the
    /// way the page sizes the grid to its container.
    #[wasm_bindgen(js_name = fromViewport)]
    pub fn from_viewport(
        width_px: u32,
        height_px: u32,
        cell_size_px: u32,
        tick_interval_ms: u64,
    ) -> Result<WasmSimulation, JsValue> {
        let viewport = Viewport {
            width_px,
            height_px,
            cell_size_px,
        };
        let config = GameConfig::from_viewport(&viewport, tick_interval_ms)
            .map_err(|e| JsValue::from_str(&format!("Invalid viewport: {e}")))?;

        let simulation = Simulation::new(&config)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;

        Ok(WasmSimulation { simulation })
    }

    /// Advance one generation if the session is running.
    ///
    /// The host page's interval timer is the schedule here; this call gates
    /// on the running flag only. Returns whether a generation was computed.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        if !self.simulation.is_running() {
            return false;
        }
        self.simulation.step();
        true
    }

    /// Advance exactly one generation, running flag ignored.
    #[wasm_bindgen]
    pub fn step(&mut self) {
        self.simulation.step();
    }

    /// Advance multiple generations, running flag ignored.
    #[wasm_bindgen]
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.simulation.step();
        }
    }

    /// Mark the session running. No-op when already running.
    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.simulation.start();
    }

    /// Mark the session stopped. No-op when already stopped.
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    /// Kill every cell and reset the generation counter. The running flag is
    /// untouched.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.simulation.clear();
    }

    /// Flip one cell, returning its new state.
    #[wasm_bindgen]
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, JsValue> {
        self.simulation
            .toggle(row, col)
            .map_err(|e| JsValue::from_str(&format!("Toggle failed: {e}")))
    }

    /// Flip the cell behind a flat row-major index, the shape click handlers
    /// see when cells are laid out as a flat list of DOM nodes.
    #[wasm_bindgen(js_name = toggleIndex)]
    pub fn toggle_index(&mut self, index: usize) -> Result<bool, JsValue> {
        let (row, col) = index_to_cell(index, self.simulation.config().columns);
        self.toggle(row, col)
    }

    /// Change the tick interval in milliseconds.
    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, interval_ms: u64) {
        self.simulation
            .set_speed(std::time::Duration::from_millis(interval_ms));
    }

    /// Rebuild the grid all-dead at new dimensions.
    #[wasm_bindgen]
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), JsValue> {
        self.simulation
            .resize(rows, columns)
            .map_err(|e| JsValue::from_str(&format!("Resize failed: {e}")))
    }

    /// Rebuild the grid to fill a resized pixel surface.
    #[wasm_bindgen(js_name = resizeToViewport)]
    pub fn resize_to_viewport(
        &mut self,
        width_px: u32,
        height_px: u32,
        cell_size_px: u32,
    ) -> Result<(), JsValue> {
        let viewport = Viewport {
            width_px,
            height_px,
            cell_size_px,
        };
        let (rows, columns) = viewport
            .grid_dimensions()
            .map_err(|e| JsValue::from_str(&format!("Invalid viewport: {e}")))?;
        self.resize(rows, columns)
    }

    /// Replace the grid with a fresh population from a seed, at the current
    /// dimensions.
    #[wasm_bindgen]
    pub fn reset(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;

        let running = self.simulation.is_running();
        let mut fresh = Simulation::with_seed(self.simulation.config(), &seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed: {e}")))?;
        if running {
            fresh.start();
        }
        self.simulation = fresh;

        Ok(())
    }

    /// Flat row-major cell view (1 = alive), for canvas painting.
    #[wasm_bindgen]
    pub fn cells(&self) -> js_sys::Uint8Array {
        let bytes: Vec<u8> = self
            .simulation
            .grid()
            .cells()
            .iter()
            .map(|&alive| alive as u8)
            .collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    /// Get current session state as JSON.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        // Create serializable state snapshot
        let grid = self.simulation.grid();
        let snapshot = StateSnapshot {
            cells: grid.cells(),
            rows: grid.rows(),
            columns: grid.columns(),
            generation: self.simulation.generation(),
            running: self.simulation.is_running(),
            tick_interval_ms: self.simulation.config().tick_interval_ms,
        };

        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Get grid statistics as JSON.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let stats = GridStats::from_grid(self.simulation.grid());
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Number of live cells.
    #[wasm_bindgen(js_name = getPopulation)]
    pub fn get_population(&self) -> usize {
        self.simulation.grid().population()
    }

    /// Get current generation count.
    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.simulation.generation()
    }

    /// Whether ticks currently advance the grid.
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    /// Get grid height in cells.
    #[wasm_bindgen(js_name = getRows)]
    pub fn get_rows(&self) -> usize {
        self.simulation.grid().rows()
    }

    /// Get grid width in cells.
    #[wasm_bindgen(js_name = getColumns)]
    pub fn get_columns(&self) -> usize {
        self.simulation.grid().columns()
    }
}

/// Serializable snapshot of session state.
#[derive(Serialize)]
struct StateSnapshot<'a> {
    cells: &'a [bool],
    rows: usize,
    columns: usize,
    generation: u64,
    running: bool,
    tick_interval_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_session_smoke() {
        let mut sim = WasmSimulation::new(
            r#"{"rows": 8, "columns": 8, "tick_interval_ms": 50}"#,
            r#"{"pattern": {"type": "Blinker", "origin": [2, 2]}}"#,
        )
        .unwrap();

        assert_eq!(sim.get_rows(), 8);
        assert_eq!(sim.get_columns(), 8);
        assert_eq!(sim.get_population(), 3);
        assert_eq!(sim.cells().length(), 64);

        // Stopped sessions ignore host ticks; started ones advance.
        assert!(!sim.tick());
        sim.start();
        assert!(sim.tick());
        assert_eq!(sim.get_generation(), 1);
        assert_eq!(sim.get_population(), 3);

        sim.toggle_index(0).unwrap();
        assert_eq!(sim.get_population(), 4);

        sim.clear();
        assert_eq!(sim.get_population(), 0);
        assert!(sim.is_running());
    }
}
