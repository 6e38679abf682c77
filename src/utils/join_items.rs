/// Flatten a list of items into the newline-separated text the diff runs on.
pub fn join_items<S>(items: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut result = String::with_capacity(items.iter().map(|item| item.as_ref().len() + 1).sum());

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(item.as_ref());
    }

    result
}
