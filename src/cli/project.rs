use anyhow::Result;

use crate::model::ProjectMeta;
use crate::store::ProjectStore;

pub fn create(store: &ProjectStore, id: String, name: String, description: String) -> Result<()> {
    let meta = store.create(&id, &name, &description)?;
    println!(
        "Project '{}' created at {}",
        meta.name,
        store.paths().project(&meta.id).display()
    );
    Ok(())
}

pub fn list(store: &ProjectStore) -> Result<()> {
    let projects = store.list()?;
    if projects.is_empty() {
        println!("No projects found in {}.", store.paths().root().display());
        return Ok(());
    }

    println!("{:<24} {:<30} {:<10} {:<17}", "ID", "Name", "Status", "Last Activity");
    println!("{}", "-".repeat(84));
    for p in projects {
        let name = if p.name.chars().count() > 30 {
            format!("{}...", p.name.chars().take(27).collect::<String>())
        } else {
            p.name.clone()
        };
        println!(
            "{:<24} {:<30} {:<10} {:<17}",
            p.id,
            name,
            p.status,
            p.last_activity().format("%Y-%m-%d %H:%M").to_string()
        );
    }
    Ok(())
}

pub fn open(store: &ProjectStore, id: String) -> Result<()> {
    let meta = store.open(&id)?;
    print_meta(&meta);
    Ok(())
}

pub fn show(store: &ProjectStore, id: String) -> Result<()> {
    let meta = store.get(&id)?;
    print_meta(&meta);
    Ok(())
}

pub fn check(store: &ProjectStore, id: String) -> Result<()> {
    let missing = store.check(&id)?;
    if missing.is_empty() {
        println!("Project '{}' is intact.", id);
        return Ok(());
    }

    println!("Project '{}' is missing {} file(s):", id, missing.len());
    for path in missing {
        println!("  {}", path.display());
    }
    Ok(())
}

fn print_meta(meta: &ProjectMeta) {
    println!("\n{}", "=".repeat(60));
    println!("{} ({})", meta.name, meta.id);
    println!("{}", "=".repeat(60));
    println!("Status:       {}", meta.status);
    println!("Created:      {}", meta.created_at.to_rfc3339());
    println!(
        "Last opened:  {}",
        meta.last_opened_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
    );
    if !meta.description.is_empty() {
        println!("Description:  {}", meta.description);
    }
    println!(
        "Rules:        edit scope {}, max {} lines, cross-project access {}",
        meta.rules.edit_scope,
        meta.rules.max_edit_size,
        if meta.rules.allow_cross_project_access {
            "allowed"
        } else {
            "denied"
        }
    );
}
