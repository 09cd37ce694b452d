//! Names anonymous AMD modules in compiled JavaScript

use std::fs;
use std::path::Path;

use crate::domain::ports::{FixOutcome, OutputFixer};
use crate::domain::services::{module_id, name_anonymous_define};
use crate::error::{PlaisioError, PlaisioResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct AmdModuleFixer;

impl AmdModuleFixer {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFixer for AmdModuleFixer {
    fn fix(&self, output: &Path, asset_root: &Path) -> PlaisioResult<FixOutcome> {
        let id = module_id(output, asset_root).ok_or_else(|| PlaisioError::OutsideAssetRoot {
            path: output.to_path_buf(),
            root: asset_root.to_path_buf(),
        })?;

        let content = fs::read_to_string(output)?;
        match name_anonymous_define(&content, &id) {
            Some(fixed) => {
                fs::write(output, fixed)?;
                Ok(FixOutcome::Rewritten)
            }
            None => Ok(FixOutcome::Unchanged),
        }
    }
}
