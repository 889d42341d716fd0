pub const BLOG_HEADING: &str = "Programming Blog";
pub const BLOG_TAGLINE: &str = "AI-Generated Articles on Software Development";
pub const BLOG_EMPTY: &str = "No articles yet";
pub const BLOG_EMPTY_HINT: &str = "Go to the admin panel to generate your first articles!";
pub const LOADING: &str = "Loading articles...";

pub const ADMIN_HEADING: &str = "Admin Panel";
pub const ADMIN_TAGLINE: &str = "Generate AI-powered programming articles";
pub const LABEL_TITLES: &str = "Article Titles (one per line)";
pub const LABEL_DETAILS: &str = "Additional Details (optional)";
pub const TITLES_PLACEHOLDER: &str = "Understanding Rust Traits / Building REST APIs with Axum / ...";
pub const DETAILS_PLACEHOLDER: &str =
    "Add any specific requirements, target audience, depth level, or focus areas for all articles...";
pub const GENERATING: &str = "Generating Articles...";
pub const GENERATING_HINT: &str = "This may take a minute depending on the number of articles...";

pub const CAPTURE_HINT: &str = "Enter one title per line; finish with a single '.'";
pub const ADMIN_ONLY: &str = "Open the admin panel first with 'admin'";
pub const FORM_DISABLED: &str = "Generation in progress; the form is disabled";

pub const RULE: &str =
    "================================================================";
pub const THIN_RULE: &str =
    "----------------------------------------------------------------";

pub const HELP: &str = "\
Commands:
  admin                 open the admin panel
  blog | back           back to the article list
  titles                enter titles, one per line, end with '.'
  title <text>          add a single title
  details [text]        set (or clear) the shared details
  clear                 clear titles and details
  generate              generate one article per title
  delete <n | id>       delete the n-th listed article, or by id
  help                  show this help
  quit                  leave";
