//! Output formats for the AST
//!
//!     printer  - the canonical AsciiDoc rendering, the formatter's actual output
//!     treeviz  - a one-line-per-node tree view for inspection and snapshot tests

pub mod printer;
pub mod treeviz;

pub use printer::AdocPrinter;
pub use treeviz::to_treeviz_str;
