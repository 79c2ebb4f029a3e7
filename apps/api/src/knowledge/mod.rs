// Knowledge Engine: the categorized fact store and the keyword selector that
// picks which categories ground a given question.

pub mod handlers;
pub mod selector;
pub mod store;
