use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::http::handlers::posts::{AuthorDto, CreatePostDto, PostDto, UpdatePostDto};
use crate::presentation::http::handlers::users::{CreateUserDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::update_post,
        crate::presentation::http::handlers::posts::delete_post,
        crate::presentation::http::handlers::users::create_user
    ),
    components(
        schemas(
            CreatePostDto,
            UpdatePostDto,
            AuthorDto,
            PostDto,
            CreateUserDto,
            UserDto
        )
    ),
    tags(
        (name = "posts", description = "Blog post endpoints"),
        (name = "users", description = "User registration")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
        openapi.components = Some(components);
    }
}

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn openapi_lists_every_route_and_basic_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/posts"));
        assert!(doc.paths.paths.contains_key("/posts/{id}"));
        assert!(doc.paths.paths.contains_key("/users"));

        let components = doc.components.expect("components must be present");
        assert!(components.security_schemes.contains_key("basic_auth"));
    }
}
