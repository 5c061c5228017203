use uuid::Uuid;

/// Whether `viewer` may mutate a post owned by `post_author`. Only the
/// author edits their own posts; callers that fail this check fall back to
/// the post's read view instead of raising.
pub fn can_edit(viewer: Uuid, post_author: Uuid) -> bool {
    viewer == post_author
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_can_edit_own_post() {
        let author = Uuid::now_v7();
        assert!(can_edit(author, author));
    }

    #[test]
    fn non_author_cannot_edit() {
        assert!(!can_edit(Uuid::now_v7(), Uuid::now_v7()));
    }
}
