//! Per-turn dispatcher: confirmation, script execution and registry upkeep.

pub mod notes;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use blender_bridge_core::ops;
use blender_bridge_core::types::{
    Action, BatchCreation, CurveCreation, DeletionAction, ObjectCreation, ObjectDeletion,
    ObjectManipulation, SurfaceCreation,
};
use blender_bridge_core::{BridgeError, NameRegistry, RunMode, ScriptRunner};

use crate::prompts::HELP_TEXT;
use crate::ui::{summary, Console};

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Done,
    Cancelled,
    Failed(String),
}

pub struct Agent<S> {
    runner: S,
    registry: NameRegistry,
    registry_path: Option<PathBuf>,
}

impl<S: ScriptRunner> Agent<S> {
    pub fn new(runner: S, registry: NameRegistry, registry_path: Option<PathBuf>) -> Self {
        Self {
            runner,
            registry,
            registry_path,
        }
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn runner(&self) -> &S {
        &self.runner
    }

    /// Run one parsed action to completion.
    ///
    /// Only console I/O errors are returned as `Err`; everything else ends
    /// the turn with a [`TurnOutcome`].
    pub fn handle<R: BufRead, W: Write>(
        &mut self,
        action: Action,
        user_input: &str,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        tracing::debug!("Handling {:?}", action.action_type());
        match action {
            Action::List => self.list(console),
            Action::Create(obj) => self.create_object(obj, user_input, console),
            Action::CreateCurve(curve) => self.create_curve(curve, user_input, console),
            Action::CreateSurface(surface) => self.create_surface(surface, user_input, console),
            Action::BatchCreate(batch) => self.create_batch(batch, console),
            Action::Delete(deletion) => self.delete(deletion, console),
            Action::Manipulate(manip) => self.manipulate(manip, console),
            Action::View => self.view(console),
            Action::Help => {
                console.say(HELP_TEXT)?;
                Ok(TurnOutcome::Done)
            }
        }
    }

    fn list<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<TurnOutcome> {
        if self.registry.is_empty() {
            console.say("\nNo objects in the current session")?;
        } else {
            console.say("\nAvailable objects in current session:")?;
            console.list(self.registry.objects())?;
        }
        Ok(TurnOutcome::Done)
    }

    /// Claim a session-unique name, telling the user when it differs.
    fn reserve<R: BufRead, W: Write>(
        &mut self,
        requested: &str,
        console: &mut Console<R, W>,
    ) -> Result<String> {
        let reservation = self.registry.reserve(requested);
        if reservation.renamed {
            console.say(format!(
                "Note: Name '{}' already exists. Using '{}' instead.",
                requested, reservation.name
            ))?;
        }
        Ok(reservation.name)
    }

    /// Hand code to the runner. Launch and exit failures both count as "not run".
    fn execute<R: BufRead, W: Write>(
        &self,
        code: &str,
        mode: RunMode,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        match self.runner.run_script(code, mode) {
            Ok(status) => {
                tracing::debug!("Blender run finished: {:?}", status);
                Ok(status.is_success())
            }
            Err(e) => {
                tracing::error!("Blender run failed: {}", e);
                console.say(format!("Error: {e}"))?;
                Ok(false)
            }
        }
    }

    fn fail<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        message: impl Into<String>,
    ) -> Result<TurnOutcome> {
        let message = message.into();
        console.say(format!("Error: {message}"))?;
        Ok(TurnOutcome::Failed(message))
    }

    fn cancel<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        what: &str,
    ) -> Result<TurnOutcome> {
        console.say(format!("{what} cancelled"))?;
        Ok(TurnOutcome::Cancelled)
    }

    fn persist(&self) {
        if let Some(path) = &self.registry_path {
            if let Err(e) = self.registry.save(path) {
                tracing::warn!("Could not save registry to {}: {}", path.display(), e);
            }
        }
    }

    /// Render, run, and on success register `names`.
    fn run_and_register<R: BufRead, W: Write>(
        &mut self,
        code: blender_bridge_core::Result<String>,
        names: &[String],
        console: &mut Console<R, W>,
        success: String,
        failure: &str,
    ) -> Result<TurnOutcome> {
        let code = match code {
            Ok(code) => code,
            Err(e) => return Self::fail(console, e.to_string()),
        };
        if self.execute(&code, RunMode::Background, console)? {
            for name in names {
                self.registry.add(name);
            }
            self.persist();
            console.say(success)?;
            Ok(TurnOutcome::Done)
        } else {
            console.say(failure)?;
            Ok(TurnOutcome::Failed(failure.to_string()))
        }
    }

    fn create_object<R: BufRead, W: Write>(
        &mut self,
        mut obj: ObjectCreation,
        user_input: &str,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        obj.name = self.reserve(&obj.name, console)?;
        if let Some(text) = notes::object(user_input, &obj).render("") {
            console.say(text)?;
        }
        console.say(summary::object(&obj))?;

        if !console.confirm(&format!("Create this {}?", obj.object_type))? {
            return Self::cancel(console, "Creation");
        }

        let code = Ok(ops::object::render(&obj));
        let success = format!("Successfully created {}!", obj.name);
        self.run_and_register(code, &[obj.name], console, success, "Failed to create object")
    }

    fn create_curve<R: BufRead, W: Write>(
        &mut self,
        mut curve: CurveCreation,
        user_input: &str,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        curve.name = self.reserve(&curve.name, console)?;
        if let Some(text) = notes::curve(user_input, &curve).render("curve ") {
            console.say(text)?;
        }
        console.say(summary::curve(&curve))?;

        if !console.confirm(&format!("Create this {} curve?", curve.curve_type))? {
            return Self::cancel(console, "Curve creation");
        }

        let code = ops::curve::render(&curve);
        let success = format!(
            "Successfully created {} curve {}!",
            curve.curve_type, curve.name
        );
        self.run_and_register(code, &[curve.name], console, success, "Failed to create curve")
    }

    fn create_surface<R: BufRead, W: Write>(
        &mut self,
        mut surface: SurfaceCreation,
        user_input: &str,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        surface.name = self.reserve(&surface.name, console)?;
        if let Some(text) = notes::surface(user_input, &surface).render("surface ") {
            console.say(text)?;
        }
        console.say(summary::surface(&surface))?;

        if !console.confirm(&format!("Create this {} surface?", surface.surface_type))? {
            return Self::cancel(console, "Surface creation");
        }

        if surface.surface_type.needs_base_curve() {
            if let Some(base) = surface.base_curve.as_deref() {
                if !self.registry.contains(base) {
                    return Self::fail(
                        console,
                        format!("Base curve '{}' not found in the current session", base),
                    );
                }
            }
        }

        let code = ops::surface::render(&surface);
        let success = format!(
            "Successfully created {} surface {}!",
            surface.surface_type, surface.name
        );
        self.run_and_register(code, &[surface.name], console, success, "Failed to create surface")
    }

    fn create_batch<R: BufRead, W: Write>(
        &mut self,
        mut batch: BatchCreation,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        for obj in &mut batch.objects {
            obj.name = self.reserve(&obj.name, console)?;
        }
        let mut renamed_curves = Vec::new();
        for curve in &mut batch.curves {
            let name = self.reserve(&curve.name, console)?;
            if name != curve.name {
                renamed_curves.push((std::mem::replace(&mut curve.name, name.clone()), name));
            }
        }
        for surface in &mut batch.surfaces {
            surface.name = self.reserve(&surface.name, console)?;
            // Surfaces built on a curve from the same batch follow its new name.
            if let Some(base) = surface.base_curve.as_mut() {
                if let Some((_, name)) = renamed_curves.iter().find(|(old, _)| old == base) {
                    *base = name.clone();
                }
            }
        }

        if let Some(missing) = self.missing_base_curve(&batch) {
            return Self::fail(
                console,
                format!("Base curve '{}' not found in the current session", missing),
            );
        }
        console.say(summary::batch(&batch))?;

        if !console.confirm(&format!("Create all {} items?", batch.len()))? {
            return Self::cancel(console, "Batch creation");
        }

        let code = ops::batch::render(&batch);
        let success = format!("Successfully created {} items!", batch.len());
        self.run_and_register(code, &batch.names(), console, success, "Failed to create batch items")
    }

    fn delete<R: BufRead, W: Write>(
        &mut self,
        deletion: ObjectDeletion,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        let question = match deletion.action {
            DeletionAction::DeleteAll => {
                if self.registry.is_empty() {
                    console.say("No objects to delete.")?;
                    return Ok(TurnOutcome::Cancelled);
                }
                "Delete all objects?".to_string()
            }
            DeletionAction::DeleteSpecific => {
                let name = deletion.target().unwrap_or_default();
                if !self.registry.contains(name) {
                    console.say(format!("Object '{}' not found.", name))?;
                    console.say(format!("Available objects: {}", self.available()))?;
                    return Ok(TurnOutcome::Failed(
                        BridgeError::UnknownObject(name.to_string()).to_string(),
                    ));
                }
                format!("Delete object '{}'?", name)
            }
        };

        console.say(summary::deletion(&deletion, self.registry.objects()))?;
        if !console.confirm(&question)? {
            return Self::cancel(console, "Deletion");
        }

        let code = match ops::delete::render(&deletion) {
            Ok(code) => code,
            Err(e) => return Self::fail(console, e.to_string()),
        };
        if !self.execute(&code, RunMode::Background, console)? {
            console.say("Failed to delete object(s)")?;
            return Ok(TurnOutcome::Failed("Failed to delete object(s)".to_string()));
        }

        match deletion.target() {
            None => {
                self.registry.clear();
                console.say("Successfully deleted all objects!")?;
            }
            Some(name) => {
                self.registry.remove(name);
                console.say(format!("Successfully deleted {}!", name))?;
            }
        }
        self.persist();
        Ok(TurnOutcome::Done)
    }

    fn manipulate<R: BufRead, W: Write>(
        &mut self,
        mut manip: ObjectManipulation,
        console: &mut Console<R, W>,
    ) -> Result<TurnOutcome> {
        let verb = manip.manipulation_type.as_str();

        if manip.object_name.trim().is_empty() || !self.registry.contains(&manip.object_name) {
            match console.choose_object(&self.registry, verb)? {
                Some(name) => manip.object_name = name,
                None => return Self::cancel(console, "Manipulation"),
            }
        }

        if !self.registry.contains(&manip.object_name) {
            let err = BridgeError::UnknownObject(manip.object_name.clone());
            return Self::fail(console, format!("{}. Available objects: {}", err, self.available()));
        }

        let manip = ops::manipulate::apply_defaults(manip);
        console.say(summary::manipulation(&manip))?;

        if !console.confirm(&format!("Apply this {} to {}?", verb, manip.object_name))? {
            return Self::cancel(console, "Manipulation");
        }

        let code = ops::manipulate::render(&manip);
        if self.execute(&code, RunMode::Background, console)? {
            console.say(format!(
                "Successfully {} {}!",
                manip.manipulation_type.past_tense(),
                manip.object_name
            ))?;
            Ok(TurnOutcome::Done)
        } else {
            let failure = format!("Failed to {} object", verb);
            console.say(&failure)?;
            Ok(TurnOutcome::Failed(failure))
        }
    }

    fn view<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<TurnOutcome> {
        console.say("Opening Blender GUI to view the current scene...")?;
        if self.execute("# View current scene", RunMode::Gui, console)? {
            console.say("Blender GUI opened successfully!")?;
            Ok(TurnOutcome::Done)
        } else {
            console.say("Failed to open Blender GUI")?;
            Ok(TurnOutcome::Failed("Failed to open Blender GUI".to_string()))
        }
    }

    /// First extrude/revolve base curve that neither exists nor is created by the batch.
    fn missing_base_curve<'a>(&self, batch: &'a BatchCreation) -> Option<&'a str> {
        batch
            .surfaces
            .iter()
            .filter(|s| s.surface_type.needs_base_curve())
            .filter_map(|s| s.base_curve.as_deref())
            .find(|base| {
                !self.registry.contains(base) && !batch.curves.iter().any(|c| c.name == *base)
            })
    }

    fn available(&self) -> String {
        if self.registry.is_empty() {
            "none".to_string()
        } else {
            self.registry.objects().join(", ")
        }
    }
}
