//! Compute module backed by a real WebAssembly instance.
//!
//! The module must export `getColourSquare: (i32, i32, i32) -> ()` and a
//! `memory`. It is instantiated with no imports.

use std::path::{Path, PathBuf};

use wasmtime::{Engine, Instance, Memory, Module, Store, TypedFunc};

use crate::core::ports::compute_module::{
    ComputeModule, ComputeModuleError, ComputeModuleLoader, EXPORT_GET_COLOUR_SQUARE, EXPORT_MEMORY,
};

pub struct WasmColourSquareModule {
    store: Store<()>,
    memory: Memory,
    get_colour_square: TypedFunc<(i32, i32, i32), ()>,
}

impl WasmColourSquareModule {
    /// Compiles and instantiates a module from binary or text-format bytes.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self, ComputeModuleError> {
        let engine = Engine::default();
        let module = Module::new(&engine, bytes).map_err(|e| ComputeModuleError::Compile {
            message: format!("{e:#}"),
        })?;

        let mut store = Store::new(&engine, ());
        let instance = Instance::new(&mut store, &module, &[]).map_err(|e| {
            ComputeModuleError::Instantiate {
                message: format!("{e:#}"),
            }
        })?;

        let get_colour_square = instance
            .get_typed_func::<(i32, i32, i32), ()>(&mut store, EXPORT_GET_COLOUR_SQUARE)
            .map_err(|e| ComputeModuleError::MissingExport {
                name: EXPORT_GET_COLOUR_SQUARE,
                message: format!("{e:#}"),
            })?;

        let memory = instance
            .get_memory(&mut store, EXPORT_MEMORY)
            .ok_or_else(|| ComputeModuleError::MissingExport {
                name: EXPORT_MEMORY,
                message: "no exported memory".to_string(),
            })?;

        Ok(Self {
            store,
            memory,
            get_colour_square,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ComputeModuleError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ComputeModuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let module = Self::from_bytes(bytes)?;
        tracing::info!(path = %path.display(), "compute module started");

        Ok(module)
    }
}

impl ComputeModule for WasmColourSquareModule {
    fn get_colour_square(&mut self, width: u32, red: u8, alpha: u8) -> Result<(), ComputeModuleError> {
        let width = i32::try_from(width).map_err(|_| ComputeModuleError::WidthOutOfRange { width })?;

        self.get_colour_square
            .call(&mut self.store, (width, i32::from(red), i32::from(alpha)))
            .map_err(|e| ComputeModuleError::Trap {
                message: format!("{e:#}"),
            })
    }

    fn memory(&self) -> &[u8] {
        self.memory.data(&self.store)
    }
}

/// Loads a [`WasmColourSquareModule`] from a file on disk.
#[derive(Debug, Clone)]
pub struct WasmFileLoader {
    path: PathBuf,
}

impl WasmFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ComputeModuleLoader for WasmFileLoader {
    type Module = WasmColourSquareModule;

    fn load(&self) -> Result<Self::Module, ComputeModuleError> {
        WasmColourSquareModule::from_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::envelope::{copy_result_bytes, read_length_prefix};
    use std::io::Write;

    // Writes length=4 followed by [1, 2, 3, 4].
    const FIXED_ENVELOPE_WAT: &str = r#"
        (module
          (memory (export "memory") 1)
          (func (export "getColourSquare") (param i32 i32 i32)
            (i32.store (i32.const 0) (i32.const 4))
            (i32.store (i32.const 4) (i32.const 0x04030201))))
    "#;

    // Writes one pixel [red, width, 0, alpha] per call.
    const ECHO_PARAMS_WAT: &str = r#"
        (module
          (memory (export "memory") 1)
          (func (export "getColourSquare") (param $width i32) (param $red i32) (param $alpha i32)
            (i32.store (i32.const 0) (i32.const 4))
            (i32.store8 (i32.const 4) (local.get $red))
            (i32.store8 (i32.const 5) (local.get $width))
            (i32.store8 (i32.const 6) (i32.const 0))
            (i32.store8 (i32.const 7) (local.get $alpha))))
    "#;

    #[test]
    fn test_fixed_envelope_module() {
        let mut module = WasmColourSquareModule::from_bytes(FIXED_ENVELOPE_WAT).unwrap();

        module.get_colour_square(2, 0, 0).unwrap();

        assert_eq!(read_length_prefix(module.memory()), Ok(4));
        assert_eq!(copy_result_bytes(module.memory(), 16), Ok(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_parameters_are_marshalled() {
        let mut module = WasmColourSquareModule::from_bytes(ECHO_PARAMS_WAT).unwrap();

        module.get_colour_square(9, 200, 77).unwrap();

        assert_eq!(copy_result_bytes(module.memory(), 4), Ok(vec![200, 9, 0, 77]));
    }

    #[test]
    fn test_memory_is_one_page() {
        let module = WasmColourSquareModule::from_bytes(FIXED_ENVELOPE_WAT).unwrap();

        assert_eq!(module.memory().len(), 65_536);
    }

    #[test]
    fn test_missing_entry_point() {
        let result = WasmColourSquareModule::from_bytes(r#"(module (memory (export "memory") 1))"#);

        assert!(matches!(
            result,
            Err(ComputeModuleError::MissingExport {
                name: EXPORT_GET_COLOUR_SQUARE,
                ..
            })
        ));
    }

    #[test]
    fn test_wrong_entry_point_signature() {
        let result = WasmColourSquareModule::from_bytes(
            r#"(module (memory (export "memory") 1) (func (export "getColourSquare") (param i32)))"#,
        );

        assert!(matches!(result, Err(ComputeModuleError::MissingExport { .. })));
    }

    #[test]
    fn test_missing_memory() {
        let result = WasmColourSquareModule::from_bytes(
            r#"(module (func (export "getColourSquare") (param i32 i32 i32)))"#,
        );

        assert!(matches!(
            result,
            Err(ComputeModuleError::MissingExport {
                name: EXPORT_MEMORY,
                ..
            })
        ));
    }

    #[test]
    fn test_imports_are_not_satisfied() {
        let result = WasmColourSquareModule::from_bytes(
            r#"(module (import "env" "log" (func (param i32))) (memory (export "memory") 1))"#,
        );

        assert!(matches!(result, Err(ComputeModuleError::Instantiate { .. })));
    }

    #[test]
    fn test_invalid_bytes_fail_to_compile() {
        let result = WasmColourSquareModule::from_bytes(b"\0asm not really");

        assert!(matches!(result, Err(ComputeModuleError::Compile { .. })));
    }

    #[test]
    fn test_trap_is_reported() {
        let mut module = WasmColourSquareModule::from_bytes(
            r#"(module (memory (export "memory") 1) (func (export "getColourSquare") (param i32 i32 i32) unreachable))"#,
        )
        .unwrap();

        let result = module.get_colour_square(1, 0, 0);

        assert!(matches!(result, Err(ComputeModuleError::Trap { .. })));
    }

    #[test]
    fn test_width_out_of_i32_range() {
        let mut module = WasmColourSquareModule::from_bytes(FIXED_ENVELOPE_WAT).unwrap();

        let result = module.get_colour_square(u32::MAX, 0, 0);

        assert!(matches!(
            result,
            Err(ComputeModuleError::WidthOutOfRange { width: u32::MAX })
        ));
    }

    #[test]
    fn test_file_loader_reads_module_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXED_ENVELOPE_WAT.as_bytes()).unwrap();

        let loader = WasmFileLoader::new(file.path());
        let mut module = loader.load().unwrap();
        module.get_colour_square(1, 0, 0).unwrap();

        assert_eq!(copy_result_bytes(module.memory(), 4), Ok(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_controller_renders_through_wasm_module() {
        use crate::controllers::cli::snapshot_view::SnapshotView;
        use crate::controllers::ui::controller::UiController;
        use crate::core::data::canvas_size::CanvasSize;
        use crate::core::data::render_params::RenderParameters;

        let module = WasmColourSquareModule::from_bytes(ECHO_PARAMS_WAT).unwrap();
        let view = SnapshotView::new(RenderParameters::new(0, 0));
        let mut controller = UiController::with_module(module, view, CanvasSize::new(3, 1).unwrap());

        controller.render(11, 22).unwrap();

        assert_eq!(
            controller.pixel_buffer().buffer(),
            &[11, 3, 0, 22, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_file_loader_missing_file() {
        let loader = WasmFileLoader::new("definitely/not/here/colour_map.wasm");

        let result = loader.load();

        assert!(matches!(result, Err(ComputeModuleError::Read { .. })));
    }
}
