use std::error::Error;

/// Renders an error followed by each of its sources, e.g.
/// `error sending request for url (...): operation timed out`.
pub fn chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }

    rendered
}
