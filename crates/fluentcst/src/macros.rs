/// Wrap a tree node declaration with derive Debug, Clone, PartialEq, Eq, Hash,
/// Serialize, Deserialize
macro_rules! ast_node {
    ($(#[$attr:meta])* $vis:vis struct $($rest:tt)*) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis struct $($rest)*
    };
    ($(#[$attr:meta])* $vis:vis enum $($rest:tt)*) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $($rest)*
    };
}
