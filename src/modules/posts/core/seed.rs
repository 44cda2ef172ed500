use crate::modules::posts::core::post::Post;

/// Posts present in a freshly started service.
pub fn fixture_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "First post".to_string(),
            content: "This is the first post.".to_string(),
        },
        Post {
            id: 2,
            title: "Second post".to_string(),
            content: "This is the second post.".to_string(),
        },
    ]
}
