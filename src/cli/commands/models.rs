//! `model` command handlers.

use std::io::Write;

use super::output::{self, Context};
use crate::cli::{log, CliError, LogLevel};
use crate::config::cli::{ModelCommand, ModelListArgs, ModelUpdateArgs};
use crate::storage::{ModelQuery, ModelRegistry, ModelUpdate, NewModel};

pub(super) fn run_model<R, W>(
    registry: &R,
    command: ModelCommand,
    ctx: &Context<'_>,
    out: &mut W,
) -> Result<(), CliError>
where
    R: ModelRegistry + ?Sized,
    W: Write,
{
    match command {
        ModelCommand::Create(args) => {
            let mut new = NewModel::new(&args.name, &args.team);
            new.description = args.description;
            new.tags = args.tags;

            let model = registry.create_model(new)?;
            log(ctx.log_level, LogLevel::Verbose, &format!("Registered model {} (id {})", model.name, model.id));
            output::emit(out, ctx.format, &model, |w| output::model_detail(w, &model))
        }
        ModelCommand::Get(args) => {
            let model = registry.lookup_model(&args.model)?;
            output::emit(out, ctx.format, &model, |w| output::model_detail(w, &model))
        }
        ModelCommand::List(args) => list_models(registry, args, ctx, out),
        ModelCommand::Update(args) => update_model(registry, args, ctx, out),
        ModelCommand::Delete(args) => {
            registry.delete_model(args.id)?;
            log(ctx.log_level, LogLevel::Normal, &format!("Deleted model {}", args.id));
            Ok(())
        }
    }
}

fn list_models<R, W>(registry: &R, args: ModelListArgs, ctx: &Context<'_>, out: &mut W) -> Result<(), CliError>
where
    R: ModelRegistry + ?Sized,
    W: Write,
{
    let mut query = ModelQuery::new().skip(args.skip).limit(ctx.config.page_limit(args.limit)?);
    query.team = args.team;
    query.tag = args.tag;

    let page = registry.list_models(&query)?;
    output::emit(out, ctx.format, &page, |w| {
        if page.items.is_empty() {
            return writeln!(w, "No models found");
        }
        output::model_table(w, &page.items)?;
        writeln!(w, "\n{} of {} model(s)", page.items.len(), page.total)
    })
}

fn update_model<R, W>(registry: &R, args: ModelUpdateArgs, ctx: &Context<'_>, out: &mut W) -> Result<(), CliError>
where
    R: ModelRegistry + ?Sized,
    W: Write,
{
    let mut update = ModelUpdate { description: args.description, tags: None };
    if args.clear_tags {
        update.tags = Some(Vec::new());
    } else if !args.tags.is_empty() {
        update.tags = Some(args.tags);
    }

    let model = registry.update_model(args.id, update)?;
    output::emit(out, ctx.format, &model, |w| output::model_detail(w, &model))
}
