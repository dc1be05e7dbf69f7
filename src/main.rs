//! Terminal shell for the task client.
//!
//! Pure presentation: renders the controller's list and maps line
//! commands to controller actions.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context as _;
use taskdeck::{Config, HttpTaskGateway, TaskListController, TerminalNotifier};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("reading configuration")?;
    tracing::info!("Using task store at {}", config.api_url);

    let gateway = Arc::new(HttpTaskGateway::new(&config.api_url));
    let notifier = Arc::new(TerminalNotifier);
    let mut controller = TaskListController::new(gateway, notifier);

    controller.load().await;

    println!("taskdeck - commands: list, add, toggle <n>, delete <n>, quit");
    render(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" => render(&controller),
            "add" => {
                read_draft(&mut controller, &mut lines).await?;
                controller.add().await;
                render(&controller);
            }
            "toggle" => match task_id(&controller, arg) {
                Some(id) => {
                    controller.toggle(&id).await;
                    render(&controller);
                }
                None => println!("no such task: {}", arg),
            },
            "delete" => match task_id(&controller, arg) {
                Some(id) => {
                    controller.delete(&id).await;
                    render(&controller);
                }
                None => println!("no such task: {}", arg),
            },
            "quit" | "exit" => break,
            other => println!("unknown command: {}", other),
        }
    }

    Ok(())
}

/// Fill the controller's draft from three interactive prompts.
async fn read_draft(
    controller: &mut TaskListController,
    lines: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<()> {
    prompt("title: ");
    let title = lines.next_line().await?.unwrap_or_default();

    prompt("description: ");
    let description = lines.next_line().await?.unwrap_or_default();

    prompt("completed? [y/N] ");
    let completed = lines.next_line().await?.unwrap_or_default();

    let draft = controller.draft_mut();
    draft.title = title;
    draft.description = description;
    draft.completed = matches!(
        completed.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    );
    Ok(())
}

/// Resolve a 1-based list position to a task id.
fn task_id(controller: &TaskListController, arg: &str) -> Option<String> {
    let position: usize = arg.parse().ok()?;
    controller
        .tasks()
        .get(position.checked_sub(1)?)
        .map(|t| t.id.clone())
}

fn render(controller: &TaskListController) {
    if controller.tasks().is_empty() {
        println!("(no tasks)");
        return;
    }

    for (i, task) in controller.tasks().iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        if task.description.is_empty() {
            println!("{:>3}. [{}] {}", i + 1, mark, task.title);
        } else {
            println!("{:>3}. [{}] {} - {}", i + 1, mark, task.title, task.description);
        }
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}
