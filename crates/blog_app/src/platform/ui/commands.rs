use blog_core::{AppViewModel, Msg, Page, DELETE_CONFIRM_PROMPT};

use super::constants::{ADMIN_ONLY, CAPTURE_HINT, FORM_DISABLED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msgs(Vec<Msg>),
    /// Local feedback that does not touch application state.
    Notice(String),
    Help,
    Quit,
    Nothing,
}

/// Turns terminal lines into commands. Holds the multi-line titles capture.
#[derive(Debug, Default)]
pub struct InputEditor {
    capture: Option<Vec<String>>,
}

impl InputEditor {
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    pub fn handle_line(&mut self, line: &str, view: &AppViewModel) -> Command {
        if let Some(lines) = self.capture.as_mut() {
            if line.trim() == "." {
                let titles = lines.join("\n");
                self.capture = None;
                return Command::Msgs(vec![Msg::TitlesChanged(titles)]);
            }
            lines.push(line.to_string());
            return Command::Nothing;
        }

        // A pending delete behaves like a modal: only an answer or quit gets through.
        if let Some(pending) = &view.pending_delete {
            return match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => Command::Msgs(vec![Msg::DeleteConfirmed]),
                "" | "n" | "no" => Command::Msgs(vec![Msg::DeleteCancelled]),
                "quit" | "exit" => Command::Quit,
                _ => Command::Notice(format!(
                    "{DELETE_CONFIRM_PROMPT} \"{}\" [y/N]",
                    pending.title
                )),
            };
        }

        let trimmed = line.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "admin" | "generate-new" => Command::Msgs(vec![Msg::ShowPage(Page::Admin)]),
            "blog" | "back" => Command::Msgs(vec![Msg::ShowPage(Page::Blog)]),
            "delete" | "rm" => resolve_delete(rest, view),
            "titles" => self.form_edit(view, |editor| {
                editor.capture = Some(Vec::new());
                Command::Notice(CAPTURE_HINT.to_string())
            }),
            "title" => self.form_edit(view, |_| {
                if rest.is_empty() {
                    return Command::Notice("Usage: title <text>".to_string());
                }
                let titles = if view.titles_input.trim().is_empty() {
                    rest.to_string()
                } else {
                    format!("{}\n{}", view.titles_input.trim_end(), rest)
                };
                Command::Msgs(vec![Msg::TitlesChanged(titles)])
            }),
            "details" => self.form_edit(view, |_| {
                Command::Msgs(vec![Msg::DetailsChanged(rest.to_string())])
            }),
            "clear" => self.form_edit(view, |_| {
                Command::Msgs(vec![
                    Msg::TitlesChanged(String::new()),
                    Msg::DetailsChanged(String::new()),
                ])
            }),
            "generate" => self.form_edit(view, |_| Command::Msgs(vec![Msg::GenerateClicked])),
            other => Command::Notice(format!("Unknown command {other:?}; type 'help'")),
        }
    }

    fn form_edit(
        &mut self,
        view: &AppViewModel,
        action: impl FnOnce(&mut Self) -> Command,
    ) -> Command {
        if view.page != Page::Admin {
            return Command::Notice(ADMIN_ONLY.to_string());
        }
        if view.generating {
            return Command::Notice(FORM_DISABLED.to_string());
        }
        action(self)
    }
}

/// Accepts a 1-based list position or an explicit article id.
fn resolve_delete(arg: &str, view: &AppViewModel) -> Command {
    if arg.is_empty() {
        return Command::Notice("Usage: delete <n | id>".to_string());
    }
    let by_index = arg
        .parse::<usize>()
        .ok()
        .and_then(|n| view.articles.iter().find(|row| row.index == n));
    let by_id = || view.articles.iter().find(|row| row.id.as_str() == arg);

    match by_index.or_else(by_id) {
        Some(row) => Command::Msgs(vec![Msg::DeleteRequested { id: row.id.clone() }]),
        None => Command::Notice(format!("No article {arg:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::{ArticleId, ArticleRowView, PendingDeleteView};
    use pretty_assertions::assert_eq;

    fn admin_view() -> AppViewModel {
        AppViewModel {
            page: Page::Admin,
            ..AppViewModel::default()
        }
    }

    fn with_articles(page: Page) -> AppViewModel {
        let articles = ["article-1-aaaaaaaaa", "article-2-bbbbbbbbb"]
            .iter()
            .enumerate()
            .map(|(idx, id)| ArticleRowView {
                index: idx + 1,
                id: ArticleId::from(*id),
                title: format!("Title {}", idx + 1),
                date: "October 19, 2026".to_string(),
                content: String::new(),
            })
            .collect::<Vec<_>>();
        AppViewModel {
            page,
            article_count: articles.len(),
            articles,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn titles_capture_collects_lines_until_dot() {
        let view = admin_view();
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("titles", &view),
            Command::Notice(CAPTURE_HINT.to_string())
        );
        assert!(editor.is_capturing());
        assert_eq!(editor.handle_line("Rust Traits", &view), Command::Nothing);
        assert_eq!(editor.handle_line("", &view), Command::Nothing);
        assert_eq!(editor.handle_line("quit", &view), Command::Nothing);
        assert_eq!(
            editor.handle_line(" . ", &view),
            Command::Msgs(vec![Msg::TitlesChanged("Rust Traits\n\nquit".to_string())])
        );
        assert!(!editor.is_capturing());
    }

    #[test]
    fn single_title_appends_to_existing_input() {
        let view = AppViewModel {
            titles_input: "First\n".to_string(),
            ..admin_view()
        };
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("title Second one", &view),
            Command::Msgs(vec![Msg::TitlesChanged("First\nSecond one".to_string())])
        );
    }

    #[test]
    fn form_commands_need_the_admin_page() {
        let view = AppViewModel::default();
        let mut editor = InputEditor::default();

        for line in ["titles", "title x", "details x", "clear", "generate"] {
            assert_eq!(
                editor.handle_line(line, &view),
                Command::Notice(ADMIN_ONLY.to_string()),
                "{line}"
            );
        }
        assert!(!editor.is_capturing());
    }

    #[test]
    fn form_is_disabled_while_generating() {
        let view = AppViewModel {
            generating: true,
            ..admin_view()
        };
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("generate", &view),
            Command::Notice(FORM_DISABLED.to_string())
        );
    }

    #[test]
    fn navigation_and_generate() {
        let mut editor = InputEditor::default();
        assert_eq!(
            editor.handle_line("ADMIN", &AppViewModel::default()),
            Command::Msgs(vec![Msg::ShowPage(Page::Admin)])
        );
        assert_eq!(
            editor.handle_line("back", &admin_view()),
            Command::Msgs(vec![Msg::ShowPage(Page::Blog)])
        );
        assert_eq!(
            editor.handle_line("details  for beginners ", &admin_view()),
            Command::Msgs(vec![Msg::DetailsChanged("for beginners".to_string())])
        );
        assert_eq!(
            editor.handle_line("generate", &admin_view()),
            Command::Msgs(vec![Msg::GenerateClicked])
        );
        assert_eq!(editor.handle_line("quit", &admin_view()), Command::Quit);
    }

    #[test]
    fn delete_resolves_position_or_id() {
        let view = with_articles(Page::Blog);
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("delete 2", &view),
            Command::Msgs(vec![Msg::DeleteRequested {
                id: ArticleId::from("article-2-bbbbbbbbb")
            }])
        );
        assert_eq!(
            editor.handle_line("rm article-1-aaaaaaaaa", &view),
            Command::Msgs(vec![Msg::DeleteRequested {
                id: ArticleId::from("article-1-aaaaaaaaa")
            }])
        );
        assert_eq!(
            editor.handle_line("delete 7", &view),
            Command::Notice("No article \"7\"".to_string())
        );
    }

    #[test]
    fn delete_works_from_the_admin_page() {
        let view = with_articles(Page::Admin);
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("delete 1", &view),
            Command::Msgs(vec![Msg::DeleteRequested {
                id: ArticleId::from("article-1-aaaaaaaaa")
            }])
        );
        assert_eq!(
            editor.handle_line("rm article-2-bbbbbbbbb", &view),
            Command::Msgs(vec![Msg::DeleteRequested {
                id: ArticleId::from("article-2-bbbbbbbbb")
            }])
        );
    }

    fn pending_view() -> AppViewModel {
        AppViewModel {
            pending_delete: Some(PendingDeleteView {
                id: ArticleId::from("article-1-aaaaaaaaa"),
                title: "Title 1".to_string(),
            }),
            ..with_articles(Page::Blog)
        }
    }

    #[test]
    fn pending_delete_takes_the_next_answer() {
        let view = pending_view();
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("Y", &view),
            Command::Msgs(vec![Msg::DeleteConfirmed])
        );
        assert_eq!(
            editor.handle_line(" no ", &view),
            Command::Msgs(vec![Msg::DeleteCancelled])
        );
        assert_eq!(
            editor.handle_line("", &view),
            Command::Msgs(vec![Msg::DeleteCancelled])
        );
    }

    #[test]
    fn pending_delete_reminds_on_other_commands_and_lets_quit_through() {
        let view = pending_view();
        let mut editor = InputEditor::default();

        assert_eq!(
            editor.handle_line("admin", &view),
            Command::Notice(format!("{DELETE_CONFIRM_PROMPT} \"Title 1\" [y/N]"))
        );
        assert_eq!(editor.handle_line("quit", &view), Command::Quit);
    }
}
