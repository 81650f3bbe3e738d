//! High-level command orchestration for the CLI.
//!
//! This module contains the handler functions for each CLI command (`list`, `set`,
//! `get`, `delete`). It serves as the coordination layer between:
//! - `crate::store` for reading and rewriting profile sections.
//! - `crate::ui` for user-facing output.
//!
//! Data (`list`, `get`) is printed plain, one item per line. Changes (`set`,
//! `delete`) are reported as status lines.

use anyhow::{Context, Result};

use crate::cli::{DeleteArgs, GetArgs, SetArgs};
use crate::store::{DeleteScope, ProfileFile, ProfileStore, SetRequest, SetStep};
use crate::ui::Ui;

/// Print every profile name in the config file
pub fn list(store: &ProfileStore, ui: &Ui) -> Result<()> {
    let profiles = store.list().with_context(|| {
        format!("Failed to list profiles from {}", store.paths().config_file.display())
    })?;

    for name in &profiles {
        ui.println(name);
    }
    Ok(())
}

/// Print requested option values, or every `key = value` of the profile
pub fn get(store: &ProfileStore, args: &GetArgs, ui: &Ui) -> Result<()> {
    let options = store.get(&args.profile, &args.keys)?;

    if args.keys.is_empty() {
        for kv in &options {
            ui.println(format!("{} = {}", kv.key, kv.value));
        }
    } else {
        for kv in &options {
            ui.println(&kv.value);
        }
    }
    Ok(())
}

/// Set options on a profile, splitting credentials from config
pub fn set(store: &ProfileStore, args: &SetArgs, ui: &Ui) -> Result<()> {
    let request = SetRequest {
        options: args.options.clone(),
        empty_config: args.empty || args.empty_config,
        empty_credentials: args.empty || args.empty_credentials,
    };

    let steps = store
        .set(&args.profile, &request)
        .with_context(|| format!("Failed to set options for profile '{}'", args.profile))?;

    if steps.is_empty() {
        ui.warn("Nothing to set.");
        ui.println(format!(
            "Hint: pass options as KEY=VALUE, e.g. {}",
            ui.bold("aws-configure set region=eu-central-1")
        ));
        return Ok(());
    }

    for step in &steps {
        match step {
            SetStep::Emptied(file) => {
                ui.ok(format!("Emptied profile {} for '{}'", file, args.profile));
            }
            SetStep::Wrote(file, keys) => ui.ok(format!(
                "Set profile {} for '{}': {}",
                file,
                args.profile,
                keys.join(", ")
            )),
        }
    }
    Ok(())
}

/// Delete a profile's sections
pub fn delete(store: &ProfileStore, args: &DeleteArgs, ui: &Ui) -> Result<()> {
    let scope = DeleteScope::from_flags(args.config, args.credentials);
    let outcomes = store
        .delete(&args.profile, scope)
        .with_context(|| format!("Failed to delete profile '{}'", args.profile))?;

    for outcome in &outcomes {
        let path = file_path(store, outcome.file);
        if outcome.removed {
            ui.ok(format!(
                "Deleted profile {} for '{}' {}",
                outcome.file,
                args.profile,
                ui.dim(format!("({path})"))
            ));
        } else {
            ui.warn(format!(
                "No profile {} for '{}' {}",
                outcome.file,
                args.profile,
                ui.dim(format!("({path})"))
            ));
        }
    }
    Ok(())
}

fn file_path(store: &ProfileStore, file: ProfileFile) -> String {
    file.path(store.paths()).display().to_string()
}
