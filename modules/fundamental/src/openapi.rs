use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "herodex",
        description = "Heroes, powers, and who wields which power how well"
    ),
    paths(
        crate::hero::endpoints::all,
        crate::hero::endpoints::get,
        crate::power::endpoints::all,
        crate::power::endpoints::get,
        crate::power::endpoints::update,
        crate::hero_power::endpoints::create,
    ),
    tags(
        (name = "hero"),
        (name = "power"),
        (name = "hero_power"),
    ),
)]
pub struct ApiDoc;
