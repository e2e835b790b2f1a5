// Shared fixtures and helpers for the integration tests.
#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

pub const FOOTPRINT: &str = r#"(footprint "R_0603_1608Metric"
	(version 20240108)
	(generator "pcbnew")
	(generator_version "8.0")
	(layer "F.Cu")
	(descr "Resistor SMD 0603 (1608 Metric)")
	(tags "resistor")
	(property "Reference" "REF**"
		(at 0 -1.43 0)
		(layer "F.SilkS")
		(uuid "8d8f7b1c-1f2e-4c3a-9a57-3a2b1c0d9e8f")
		(effects
			(font
				(size 1 1)
				(thickness 0.15)
			)
		)
	)
	(property "Value" "R_0603_1608Metric"
		(at 0 1.43 0)
		(layer "F.Fab")
		(uuid "2c7f8a10-5b4e-4f0e-8d1a-6e9b0c3d2a11")
		(effects
			(font
				(size 1 1)
				(thickness 0.15)
			)
		)
	)
	(attr smd)
	(fp_line
		(start -0.237258 -0.5225)
		(end 0.237258 -0.5225)
		(stroke
			(width 0.12)
			(type solid)
		)
		(layer "F.SilkS")
		(uuid "0f4a3c2e-7d6b-4e1f-9a8c-1b2d3e4f5a6b")
	)
	(fp_rect
		(start -1.48 -0.73)
		(end 1.48 0.73)
		(stroke
			(width 0.05)
			(type solid)
		)
		(fill none)
		(layer "F.CrtYd")
		(uuid "5e6f7a8b-9c0d-4e1f-8a2b-3c4d5e6f7a8b")
	)
	(fp_text user "${REFERENCE}"
		(at 0 0 0)
		(layer "F.Fab")
		(uuid "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d")
		(effects
			(font
				(size 0.4 0.4)
				(thickness 0.06)
			)
		)
	)
	(pad "1" smd roundrect
		(at -0.825 0)
		(size 0.8 0.95)
		(layers "F.Cu" "F.Paste" "F.Mask")
		(roundrect_rratio 0.25)
		(uuid "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d")
	)
	(pad "2" smd roundrect
		(at 0.825 0)
		(size 0.8 0.95)
		(layers "F.Cu" "F.Paste" "F.Mask")
		(roundrect_rratio 0.25)
		(uuid "6e7f8a9b-0c1d-4e2f-9a3b-4c5d6e7f8a9b")
	)
	(model "${KICAD8_3DMODEL_DIR}/Resistor_SMD.3dshapes/R_0603_1608Metric.wrl"
		(offset
			(xyz 0 0 0)
		)
		(scale
			(xyz 1 1 1)
		)
		(rotate
			(xyz 0 0 0)
		)
	)
)"#;

pub const BOARD: &str = r#"(kicad_pcb
	(version 20240108)
	(generator "pcbnew")
	(generator_version "8.0")
	(general
		(thickness 1.6)
		(legacy_teardrops no)
	)
	(paper "A4")
	(layers
		(0 "F.Cu" signal)
		(31 "B.Cu" signal)
		(44 "Edge.Cuts" user)
	)
	(setup
		(pad_to_mask_clearance 0)
		(allow_soldermask_bridges_in_footprints no)
		(grid_origin 100 50)
	)
	(net 0 "")
	(net 1 "GND")
	(gr_rect
		(start 0 0)
		(end 20 10)
		(stroke
			(width 0.05)
			(type default)
		)
		(fill none)
		(layer "Edge.Cuts")
		(uuid "d1e2f3a4-b5c6-4d7e-8f9a-0b1c2d3e4f5a")
	)
	(segment
		(start 5 5)
		(end 10 5)
		(width 0.25)
		(layer "F.Cu")
		(net 1)
		(uuid "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d")
	)
	(via
		(at 10 5)
		(size 0.6)
		(drill 0.3)
		(layers "F.Cu" "B.Cu")
		(net 1)
		(uuid "f1e2d3c4-b5a6-4978-8695-a4b3c2d1e0f9")
	)
)"#;

pub const SYMBOL_LIB: &str = r#"(kicad_symbol_lib
	(version 20231120)
	(generator "kicad_symbol_editor")
	(generator_version "8.0")
	(symbol "C"
		(pin_numbers hide)
		(pin_names
			(offset 0.254)
		)
		(exclude_from_sim no)
		(in_bom yes)
		(on_board yes)
		(property "Reference" "C"
			(at 0.635 2.54 0)
			(effects
				(font
					(size 1.27 1.27)
				)
				(justify left)
			)
		)
		(symbol "C_0_1"
			(polyline
				(pts
					(xy -2.032 -0.762)
					(xy 2.032 -0.762)
				)
				(stroke
					(width 0.508)
					(type default)
				)
				(fill
					(type none)
				)
			)
		)
		(symbol "C_1_1"
			(pin passive line
				(at 0 3.81 270)
				(length 2.794)
				(name "~"
					(effects
						(font
							(size 1.27 1.27)
						)
					)
				)
				(number "1"
					(effects
						(font
							(size 1.27 1.27)
						)
					)
				)
			)
		)
	)
)"#;

pub const FP_LIB_TABLE: &str = r#"(fp_lib_table
	(version 7)
	(lib (name "Project")(type "KiCad")(uri "${KIPRJMOD}/Project.pretty")(options "")(descr "Local footprints"))
)"#;

/// A `tracing` writer that collects formatted events in memory.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber that records warnings, returning its result
/// and the captured log text.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}
