//! kubectl-grep - find the right piece in `kubectl get -o yaml` output.
//!
//! The library decodes a YAML document, walks it looking for mapping keys
//! that match a search term and encodes every match as `path: subtree`.
//!
//! ```
//! use kubectl_grep::app::{app, AppOptions};
//!
//! let pod = "metadata:\n  labels:\n    app: web\nspec:\n  containers:\n  - name: web\n    image: nginx\n";
//! let output = app(pod, &AppOptions::new("image")).unwrap();
//! assert_eq!(output, ".spec.containers.web.image: nginx\n");
//! ```

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod file;
pub mod pipe;
pub mod search;

pub use error::{GrepError, Result};
