use std::io::Write;

use anyhow::{anyhow, Result};
use tracing::info;

use pb_core::idea::{count_missing, IdeaDraft, IdeaFilters, IdeaIngredient, ReadinessTier};
use pb_core::ids::{IdeaId, PantryItemId};
use pb_core::observe::{Signal, Snapshots};
use pb_core::ports::{DeleteIdeaOptions, IdeaListOptions};

use super::args::{Command, IdeasCommand, PantryCommand, SaveIdeaArgs};
use super::render::{render_groups, render_idea_detail, render_ideas, render_items};
use crate::bootstrap::AppRuntime;

/// Execute one command, writing its human-readable output to `out`.
pub async fn run(runtime: &AppRuntime, command: Command, out: &mut (dyn Write + Send)) -> Result<()> {
    match command {
        Command::Pantry(cmd) => run_pantry(runtime, cmd, out).await,
        Command::Ideas(cmd) => run_ideas(runtime, cmd, out).await,
    }
}

fn ingredient_list(available: Vec<String>, missing: Vec<String>) -> Vec<IdeaIngredient> {
    available
        .into_iter()
        .map(IdeaIngredient::named)
        .chain(missing.into_iter().map(|name| IdeaIngredient::named(name).missing()))
        .collect()
}

async fn run_pantry(runtime: &AppRuntime, cmd: PantryCommand, out: &mut (dyn Write + Send)) -> Result<()> {
    let usecases = runtime.usecases();
    match cmd {
        PantryCommand::List { query, tag: Some(tag) } => {
            let items = usecases.watch_pantry_items().execute(Some(&tag)).await?.latest();
            let items = pb_core::pantry::filter_items(&items, &query);
            write!(out, "{}", render_items(&items))?;
        }
        PantryCommand::List { query, tag: None } => {
            let groups = usecases
                .watch_pantry_groups()
                .execute(Snapshots::once(query))
                .await?
                .latest();
            write!(out, "{}", render_groups(&groups))?;
        }
        PantryCommand::Watch { query } => {
            let search = Signal::new(query);
            let mut groups = usecases.watch_pantry_groups().execute(search.subscribe()).await?;
            loop {
                tokio::select! {
                    next = groups.next() => {
                        let Some(groups) = next else { break };
                        writeln!(out, "---")?;
                        write!(out, "{}", render_groups(&groups))?;
                        out.flush()?;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("Stopping pantry watch");
                        break;
                    }
                }
            }
        }
        PantryCommand::Add { name, category } => {
            match usecases.quick_add_pantry_item().execute(&name, category).await? {
                Some(id) => writeln!(out, "Added {id}")?,
                None => writeln!(out, "Nothing to add: name is blank")?,
            }
        }
        PantryCommand::Edit { id, name, category } => {
            let id = PantryItemId::from(id);
            if usecases.save_pantry_item_edit().execute(&id, &name, category).await? {
                writeln!(out, "Saved {id}")?;
            } else {
                writeln!(out, "Nothing saved: name is blank")?;
            }
        }
        PantryCommand::Remove { ids } => {
            let ids: Vec<PantryItemId> = ids.into_iter().map(PantryItemId::from).collect();
            match ids.as_slice() {
                [one] => usecases.remove_pantry_item().execute(one).await?,
                many => usecases.remove_pantry_items().execute(many).await?,
            }
            writeln!(out, "Removed {}", ids.len())?;
        }
        PantryCommand::Prune { keep } => {
            let removed = usecases.prune_pantry().execute(keep).await?;
            writeln!(out, "Removed {removed}")?;
        }
    }
    Ok(())
}

fn draft_from(args: &SaveIdeaArgs, ingredients: &[IdeaIngredient]) -> IdeaDraft {
    IdeaDraft {
        prompt: args.prompt.clone(),
        title: args.title.clone(),
        description: args.description.clone(),
        missing_count: args
            .missing
            .unwrap_or_else(|| count_missing(ingredients) as f64),
        total_score: args.score,
        servings: args.servings,
        total_time_minutes: args.minutes,
        allow_substitutions: args.allow_substitutions,
        ..Default::default()
    }
}

async fn run_ideas(runtime: &AppRuntime, cmd: IdeasCommand, out: &mut (dyn Write + Send)) -> Result<()> {
    let usecases = runtime.usecases();
    match cmd {
        IdeasCommand::List {
            tier,
            limit,
            max_missing,
            minutes,
        } => {
            let tier = tier
                .map(|t| {
                    ReadinessTier::parse(&t.to_uppercase())
                        .ok_or_else(|| anyhow!("unknown readiness tier: {t}"))
                })
                .transpose()?;
            let options = IdeaListOptions { tier, limit };

            let ideas = if max_missing.is_some() || minutes.is_some() {
                let mut filters = IdeaFilters::default();
                if let Some(max_missing) = max_missing {
                    filters.set_max_missing(max_missing);
                }
                filters.time_minutes = minutes;
                usecases
                    .list_ideas()
                    .execute_filtered(options, Snapshots::once(filters))
                    .await?
                    .latest()
            } else {
                usecases.list_ideas().execute(options).await?.latest()
            };
            write!(out, "{}", render_ideas(&ideas))?;
        }
        IdeasCommand::Show { id } => {
            let detail = usecases.get_idea_detail().execute(&IdeaId::from(id.as_str())).await?;
            let idea = detail
                .idea
                .latest()
                .ok_or_else(|| anyhow!("idea not found: {id}"))?;
            write!(out, "{}", render_idea_detail(&idea, &detail.ingredients.latest()))?;
        }
        IdeasCommand::Save(args) => {
            let ingredients =
                ingredient_list(args.ingredients.clone(), args.missing_ingredients.clone());
            let draft = draft_from(&args, &ingredients);
            let id = args.id.as_deref().map(IdeaId::from);
            match usecases.save_idea().execute(id.as_ref(), draft, ingredients).await? {
                Some(id) => writeln!(out, "Saved {id}")?,
                None => writeln!(out, "Nothing to save: title and prompt are blank")?,
            }
        }
        IdeasCommand::ReplaceIngredients {
            id,
            ingredients,
            missing_ingredients,
        } => {
            let id = IdeaId::from(id);
            usecases
                .replace_idea_ingredients()
                .execute(&id, ingredient_list(ingredients, missing_ingredients))
                .await?;
            writeln!(out, "Replaced ingredients of {id}")?;
        }
        IdeasCommand::Delete { id, with_ingredients } => {
            let id = IdeaId::from(id);
            let options = DeleteIdeaOptions {
                delete_ingredients: with_ingredients,
            };
            usecases.delete_idea().execute(&id, options).await?;
            writeln!(out, "Deleted {id}")?;
        }
        IdeasCommand::Prune { keep } => {
            let removed = usecases.prune_ideas().execute(keep).await?;
            writeln!(out, "Removed {removed}")?;
        }
        IdeasCommand::Suggest => {
            let names = usecases.watch_pantry_suggestions().execute().await?.latest();
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}
