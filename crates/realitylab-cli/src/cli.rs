//! Command definitions and their handlers.
//!
//! Each command has a clap argument struct that converts into the matching
//! core parameter type, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Lab → Display → Renderer
//! ```

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use realitylab_core::{
    display::{Ancestry, CreateResult, DeleteResult, OperationStatus, Realities, RealityTree},
    generation::profile_context,
    models::{ConflictResolution, Profile},
    params::{ComparePair, ForkReality, Id, ImportGeneration, MergeRealities},
    GenerationRequest, ImportOutcome, Lab, MergeMode,
};

use crate::renderer::TerminalRenderer;

/// Identify a saved reality
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Identifier of the reality, e.g. reality_3f2a...")]
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// List saved realities
#[derive(Args)]
pub struct ListRealitiesArgs {
    /// Show the fork lineage as a tree instead of a flat list
    #[arg(long)]
    pub tree: bool,
}

/// Import generator output as a new reality
///
/// The text may wrap the plan JSON in prose or code fences; the first
/// balanced JSON object is used. Output without a usable plan is reported
/// and nothing is saved.
#[derive(Args)]
pub struct ImportArgs {
    /// File holding the generator output, or "-" to read stdin
    pub file: PathBuf,
    /// The prompt the plan was generated from
    #[arg(short, long, default_value = "")]
    pub prompt: String,
    /// Name for the saved reality. Defaults to the plan's own name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Record the new reality as a fork of this one
    #[arg(long)]
    pub parent: Option<String>,
}

impl ImportArgs {
    /// Read the generator text and build the core parameters.
    pub fn into_params(self) -> Result<ImportGeneration> {
        let text = if self.file.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read generator output from stdin")?;
            buffer
        } else {
            fs::read_to_string(&self.file)
                .with_context(|| format!("Failed to read {}", self.file.display()))?
        };

        Ok(ImportGeneration {
            text,
            prompt: self.prompt,
            name: self.name,
            parent_id: self.parent,
        })
    }
}

/// Fork a saved reality
#[derive(Args)]
pub struct ForkArgs {
    #[arg(help = "Identifier of the reality to fork")]
    pub parent_id: String,
    /// Name for the fork. Defaults to "<parent> (fork)"
    #[arg(short, long)]
    pub name: Option<String>,
    /// Prompt for the fork. Defaults to the parent's prompt
    #[arg(short, long)]
    pub prompt: Option<String>,
}

impl From<ForkArgs> for ForkReality {
    fn from(val: ForkArgs) -> Self {
        ForkReality {
            parent_id: val.parent_id,
            name: val.name,
            document: None,
            prompt: val.prompt,
        }
    }
}

/// Show or change the active reality
#[derive(Args)]
pub struct ActiveArgs {
    #[arg(help = "Make this reality the active one; omit to show the current one")]
    pub id: Option<String>,
}

#[derive(Subcommand)]
pub enum RealityCommands {
    /// List saved realities
    #[command(aliases = ["l", "ls"])]
    List(ListRealitiesArgs),
    /// Show a saved reality in full
    #[command(alias = "s")]
    Show(IdArgs),
    /// Import generator output as a new reality
    #[command(alias = "i")]
    Import(ImportArgs),
    /// Fork a saved reality
    #[command(alias = "f")]
    Fork(ForkArgs),
    /// Delete a saved reality
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// List the direct forks of a reality
    Children(IdArgs),
    /// Show the lineage of a reality, oldest ancestor first
    Ancestry(IdArgs),
    /// Show or change the active reality
    Active(ActiveArgs),
}

/// Compare two saved realities
#[derive(Args)]
pub struct CompareArgs {
    #[arg(help = "Identifier of the first reality")]
    pub a: String,
    #[arg(help = "Identifier of the second reality")]
    pub b: String,
}

impl From<CompareArgs> for ComparePair {
    fn from(val: CompareArgs) -> Self {
        ComparePair { a: val.a, b: val.b }
    }
}

/// Merge two saved realities
///
/// Without --save the merge is a preview and nothing is written. With
/// --save every conflict that is not auto-resolvable needs a --resolve
/// choice, referenced by its position or by its cf- identifier.
#[derive(Args)]
pub struct MergeArgs {
    #[arg(help = "Identifier of the first reality")]
    pub a: String,
    #[arg(help = "Identifier of the second reality")]
    pub b: String,
    /// Resolve a conflict, as REF=A, REF=B or REF=suggested
    #[arg(short, long, value_name = "REF=CHOICE")]
    pub resolve: Vec<ConflictResolution>,
    /// Let resolutions pick which side's values land in the merged plan
    #[arg(long)]
    pub apply_choices: bool,
    /// Save the merged plan under this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

impl From<MergeArgs> for MergeRealities {
    fn from(val: MergeArgs) -> Self {
        MergeRealities {
            a: val.a,
            b: val.b,
            resolutions: val.resolve,
            mode: if val.apply_choices {
                MergeMode::ApplyChoices
            } else {
                MergeMode::Observed
            },
            save_as: val.save,
        }
    }
}

/// Replace the career profile from a JSON file
#[derive(Args)]
pub struct ProfileFileArgs {
    /// JSON file holding the profile (camelCase fields)
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the current profile
    #[command(alias = "s")]
    Show,
    /// Replace the profile from a JSON file
    Set(ProfileFileArgs),
    /// Print the profile summary that accompanies generation requests
    Context,
}

/// Print the generation request for a prompt
#[derive(Args)]
pub struct RequestArgs {
    /// What the user wants to become
    pub prompt: String,
}

/// Remove all stored data
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the removal (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

/// Runs commands against a lab and renders their results.
pub struct Cli {
    lab: Lab,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(lab: Lab, renderer: TerminalRenderer) -> Self {
        Self { lab, renderer }
    }

    pub async fn handle_reality_command(&self, command: RealityCommands) -> Result<()> {
        match command {
            RealityCommands::List(args) if args.tree => self.reality_tree().await,
            RealityCommands::List(_) => self.list_realities().await,
            RealityCommands::Show(args) => self.show_reality(&args.into()).await,
            RealityCommands::Import(args) => self.import(&args.into_params()?).await,
            RealityCommands::Fork(args) => self.fork(&args.into()).await,
            RealityCommands::Delete(args) => self.delete(&args.into()).await,
            RealityCommands::Children(args) => self.children(&args.into()).await,
            RealityCommands::Ancestry(args) => self.ancestry(&args.into()).await,
            RealityCommands::Active(ActiveArgs { id: Some(id) }) => {
                self.set_active(&Id { id }).await
            }
            RealityCommands::Active(ActiveArgs { id: None }) => self.show_active().await,
        }
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Show => {
                let profile = self.lab.profile().await.context("Failed to load profile")?;
                self.renderer.render(&profile.to_string())
            }
            ProfileCommands::Set(args) => self.set_profile(&args).await,
            ProfileCommands::Context => {
                let profile = self.lab.profile().await.context("Failed to load profile")?;
                println!("{}", profile_context(&profile));
                Ok(())
            }
        }
    }

    pub async fn list_realities(&self) -> Result<()> {
        let realities = self
            .lab
            .list_realities()
            .await
            .context("Failed to list realities")?;
        self.renderer.render(&Realities(realities).to_string())
    }

    async fn reality_tree(&self) -> Result<()> {
        let realities = self
            .lab
            .list_realities()
            .await
            .context("Failed to list realities")?;
        self.renderer.render(&RealityTree(realities).to_string())
    }

    async fn show_reality(&self, params: &Id) -> Result<()> {
        let reality = self
            .lab
            .show_reality(params)
            .await
            .context("Failed to load reality")?
            .ok_or_else(|| anyhow!("Reality with ID {} not found", params.id))?;
        self.renderer.render(&reality.to_string())
    }

    async fn import(&self, params: &ImportGeneration) -> Result<()> {
        let outcome = self
            .lab
            .import_generation(params)
            .await
            .context("Failed to import generator output")?;

        match outcome {
            ImportOutcome::Saved(reality) => {
                self.renderer.render(&CreateResult::new(reality).to_string())
            }
            ImportOutcome::Opaque { text, reason } => {
                debug!("Opaque generator output ({} bytes)", text.len());
                self.renderer.render_status(&OperationStatus::warning(format!(
                    "Generator output held no plan, nothing was saved ({reason})"
                )))
            }
        }
    }

    async fn fork(&self, params: &ForkReality) -> Result<()> {
        let reality = self
            .lab
            .fork_reality(params)
            .await
            .context("Failed to fork reality")?;
        self.renderer.render(&CreateResult::new(reality).to_string())
    }

    async fn delete(&self, params: &Id) -> Result<()> {
        let reality = self
            .lab
            .show_reality(params)
            .await
            .context("Failed to load reality")?
            .ok_or_else(|| anyhow!("Reality with ID {} not found", params.id))?;

        if !self
            .lab
            .delete_reality(params)
            .await
            .context("Failed to delete reality")?
        {
            bail!("Reality with ID {} not found", params.id);
        }
        self.renderer.render(&DeleteResult::new(reality).to_string())
    }

    async fn children(&self, params: &Id) -> Result<()> {
        let children = self
            .lab
            .children(params)
            .await
            .context("Failed to list forks")?;
        self.renderer.render(&Realities(children).to_string())
    }

    async fn ancestry(&self, params: &Id) -> Result<()> {
        let chain = self
            .lab
            .ancestry(params)
            .await
            .context("Failed to walk lineage")?;
        self.renderer.render(&Ancestry(chain).to_string())
    }

    async fn show_active(&self) -> Result<()> {
        match self
            .lab
            .active_reality()
            .await
            .context("Failed to load active reality")?
        {
            Some(reality) => self.renderer.render(&reality.to_string()),
            None => self
                .renderer
                .render_status(&OperationStatus::warning("No active reality")),
        }
    }

    async fn set_active(&self, params: &Id) -> Result<()> {
        self.lab
            .set_active_reality(params)
            .await
            .context("Failed to set active reality")?;
        self.renderer.render_status(&OperationStatus::success(format!(
            "Active reality is now {}",
            params.id
        )))
    }

    pub async fn compare(&self, params: &ComparePair) -> Result<()> {
        let report = self
            .lab
            .compare(params)
            .await
            .context("Failed to compare realities")?;
        self.renderer.render(&report.to_string())
    }

    pub async fn merge(&self, params: &MergeRealities) -> Result<()> {
        if params.save_as.is_none() {
            let outcome = self
                .lab
                .merge(params)
                .await
                .context("Failed to merge realities")?;
            return self.renderer.render(&outcome.to_string());
        }

        let (outcome, reality) = self
            .lab
            .merge_and_save(params)
            .await
            .context("Failed to save merged reality")?;
        self.renderer.render(&outcome.to_string())?;
        self.renderer.render("\n")?;
        self.renderer.render(&CreateResult::new(reality).to_string())
    }

    async fn set_profile(&self, args: &ProfileFileArgs) -> Result<()> {
        let json = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let profile: Profile = serde_json::from_str(&json)
            .with_context(|| format!("Invalid profile JSON in {}", args.file.display()))?;

        self.lab
            .save_profile(&profile)
            .await
            .context("Failed to save profile")?;
        self.renderer
            .render_status(&OperationStatus::success("Profile saved"))?;
        self.renderer.render(&profile.to_string())
    }

    pub async fn request(&self, args: RequestArgs) -> Result<()> {
        let profile = self.lab.profile().await.context("Failed to load profile")?;
        let request = GenerationRequest::new(args.prompt, &profile);
        println!("{}", serde_json::to_string_pretty(&request)?);
        Ok(())
    }

    pub async fn storage(&self) -> Result<()> {
        let info = self
            .lab
            .storage_info()
            .await
            .context("Failed to read storage usage")?;
        self.renderer.render(&info.to_string())
    }

    pub async fn clear(&self, args: &ClearArgs) -> Result<()> {
        if !args.confirm {
            bail!("Clearing removes every reality and the profile; pass --confirm to proceed");
        }
        self.lab
            .clear_all()
            .await
            .context("Failed to clear storage")?;
        self.renderer
            .render_status(&OperationStatus::success("Cleared all stored data"))
    }
}
