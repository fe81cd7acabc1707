mod screen;
mod seed;

use std::fs::File;
use std::io;
use std::time::Duration;

use catalog_lib::{EditIntents, Product, ProductRepository, ToastBus};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use tablekit::{CellValue, Column, Row, TableState};

use crate::screen::Screen;

/// A catalog product adapted to the table engine's row contract.
#[derive(Debug, Clone)]
struct ProductRow(Product);

impl Row for ProductRow {
    fn field(&self, key: &str) -> CellValue {
        let p = &self.0;
        match key {
            "id" => p.id.as_str().into(),
            "name" => p.name.as_str().into(),
            "description" => p.description.as_str().into(),
            "logo" => p.logo.as_str().into(),
            "date_release" => p.date_release.to_string().into(),
            "date_revision" => p.date_revision.to_string().into(),
            _ => CellValue::Null,
        }
    }
}

fn columns() -> Vec<Column<ProductRow>> {
    vec![
        Column::new("id", "ID").sortable().width_px(12),
        Column::new("name", "Name").sortable().width_px(22),
        Column::new("description", "Description").width_px(34),
        Column::new("date_release", "Released").sortable().width_px(12),
        // Display the logo host instead of the full URL. Filtering sees
        // this derived text too; the column is deliberately not sortable.
        Column::new("logo", "Logo")
            .accessor(|row: &ProductRow| {
                let url = &row.0.logo;
                let host = url
                    .split_once("://")
                    .map(|(_, rest)| rest.split('/').next().unwrap_or(rest))
                    .unwrap_or(url);
                host.into()
            })
            .width_px(20),
    ]
}

struct App {
    table: TableState<ProductRow>,
    toasts: ToastBus,
    intents: EditIntents,
    search: String,
    sort_cursor: Option<usize>,
}

impl App {
    fn new(products: Vec<Product>) -> Self {
        let mut table = TableState::new(columns());
        table.set_rows(products.into_iter().map(ProductRow).collect());
        Self {
            table,
            toasts: ToastBus::new(),
            intents: EditIntents::new(),
            search: String::new(),
            sort_cursor: None,
        }
    }

    fn sortable_keys(&self) -> Vec<String> {
        self.table
            .columns()
            .iter()
            .filter(|c| c.is_sortable())
            .map(|c| c.key().to_string())
            .collect()
    }

    /// Tab moves the sort to the next sortable column (ascending).
    fn sort_next_column(&mut self) {
        let keys = self.sortable_keys();
        if keys.is_empty() {
            return;
        }
        let next = match self.sort_cursor {
            Some(i) => (i + 1) % keys.len(),
            None => 0,
        };
        self.sort_cursor = Some(next);
        self.table.sort_by(&keys[next]);
    }

    /// Enter flips the direction of the active sort column.
    fn toggle_sort_direction(&mut self) {
        if let Some((key, _)) = self.table.sort() {
            let key = key.to_string();
            self.table.sort_by(&key);
        }
    }

    /// Issues and immediately validates a one-shot edit token for the
    /// first row in view, reporting the outcome as a toast.
    fn request_edit(&mut self) {
        let Some(row) = self.table.view_rows().first() else {
            self.toasts.warning("nothing to edit on this page");
            return;
        };
        let id = row.0.id.clone();
        let token = self.intents.allow_once(&id);
        if self.intents.validate_and_consume(&id, Some(&token)) {
            self.toasts.success(format!("edit authorized for {id}"));
        } else {
            self.toasts.error(format!("edit denied for {id}"));
        }
        log::info!("[app] edit intent for {id}");
    }

    /// Returns `false` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Esc => {
                self.search.clear();
                self.table.apply_filter("");
            }
            KeyCode::Backspace => {
                self.search.pop();
                let term = self.search.clone();
                self.table.apply_filter(&term);
            }
            KeyCode::Tab => self.sort_next_column(),
            KeyCode::Enter => self.toggle_sort_direction(),
            KeyCode::Left => {
                let page = self.table.page();
                self.table.goto_page(page.saturating_sub(1));
            }
            KeyCode::Right => {
                let page = self.table.page();
                self.table.goto_page(page + 1);
            }
            KeyCode::Char('+') => {
                let size = self.table.page_size() + 1;
                self.table.change_page_size(size);
            }
            KeyCode::Char('-') => {
                let size = self.table.page_size().saturating_sub(1);
                self.table.change_page_size(size);
            }
            KeyCode::Char('e') => self.request_edit(),
            KeyCode::Char(c) => {
                self.search.push(c);
                let term = self.search.clone();
                self.table.apply_filter(&term);
            }
            _ => {}
        }
        true
    }
}

async fn load_products() -> Vec<Product> {
    let repo = seed::demo_repository().await;
    match repo.list_all().await {
        Ok(products) => products,
        Err(e) => {
            log::error!("[app] failed to load products: {e}");
            Vec::new()
        }
    }
}

fn run(app: &mut App) -> io::Result<()> {
    let mut screen = Screen::new()?;

    let count = app.table.total_filtered();
    app.toasts.info(format!("{count} products loaded"));

    loop {
        screen.draw(app)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let log_file = File::create("catalog-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let products = load_products().await;
    let mut app = App::new(products);

    if let Err(e) = run(&mut app) {
        eprintln!("Error: {e}");
    }
}
