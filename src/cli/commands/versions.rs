//! `version` command handlers.

use std::io::Write;

use super::output::{self, Context};
use crate::cli::{log, CliError, LogLevel};
use crate::config::cli::{MetricArg, VersionCommand, VersionCreateArgs};
use crate::storage::{Metrics, ModelKey, ModelRegistry, NewVersion};

pub(super) fn run_version<R, W>(
    registry: &R,
    command: VersionCommand,
    ctx: &Context<'_>,
    out: &mut W,
) -> Result<(), CliError>
where
    R: ModelRegistry + ?Sized,
    W: Write,
{
    match command {
        VersionCommand::Create(args) => create_version(registry, args, ctx, out),
        VersionCommand::Get(args) => {
            let version = registry.get_version(args.id)?;
            output::emit(out, ctx.format, &version, |w| output::version_detail(w, &version))
        }
        VersionCommand::List(args) => {
            let versions = registry.list_versions(args.model_id)?;
            output::emit(out, ctx.format, &versions, |w| {
                if versions.is_empty() {
                    return writeln!(w, "No versions found for model {}", args.model_id);
                }
                output::version_table(w, &versions)?;
                writeln!(w, "\n{} version(s)", versions.len())
            })
        }
        VersionCommand::Latest(args) => {
            let model = registry.lookup_model(&args.model)?;
            let version = registry.latest_version(&ModelKey::Id(model.id), args.stage)?;
            output::emit(out, ctx.format, &version, |w| output::version_detail(w, &version))
        }
        VersionCommand::Promote(args) => {
            let version = registry.promote_version(args.id, args.stage)?;
            log(
                ctx.log_level,
                LogLevel::Verbose,
                &format!("Version {} is now {}", version.id, version.stage),
            );
            output::emit(out, ctx.format, &version, |w| output::version_detail(w, &version))
        }
        VersionCommand::Metrics(args) => {
            let version = registry.log_metrics(args.id, collect_metrics(args.metrics))?;
            output::emit(out, ctx.format, &version, |w| output::version_detail(w, &version))
        }
        VersionCommand::Delete(args) => {
            registry.delete_version(args.id)?;
            log(ctx.log_level, LogLevel::Normal, &format!("Deleted version {}", args.id));
            Ok(())
        }
    }
}

fn create_version<R, W>(
    registry: &R,
    args: VersionCreateArgs,
    ctx: &Context<'_>,
    out: &mut W,
) -> Result<(), CliError>
where
    R: ModelRegistry + ?Sized,
    W: Write,
{
    let mut new = NewVersion::new(&args.label, &args.path).with_stage(args.stage);
    new.metrics = collect_metrics(args.metrics);
    new.tags = args.tags;
    new.description = args.description;

    let version = registry.create_version(args.model_id, new)?;
    log(
        ctx.log_level,
        LogLevel::Verbose,
        &format!("Registered version {} of model {} (id {})", version.version, version.model_id, version.id),
    );
    output::emit(out, ctx.format, &version, |w| output::version_detail(w, &version))
}

/// Later occurrences of a key win
fn collect_metrics(args: Vec<MetricArg>) -> Metrics {
    args.into_iter().map(|m| (m.key, m.value)).collect()
}
