use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct CharacteristicDoc {
    /// RAM size
    pub ram_memory: f64,
    /// ROM/Storage size
    pub rom_memory: f64,
}

#[derive(ToSchema)]
pub struct PhoneDoc {
    pub identifier: String,
    pub brand: String,
    pub model: String,
    pub characteristics: CharacteristicDoc,
}

#[derive(ToSchema)]
pub struct NotFoundDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorItemDoc {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorDoc { pub detail: Vec<ValidationErrorItemDoc> }

#[derive(OpenApi)]
#[openapi(
    info(title = "Phones API"),
    paths(
        crate::routes::health,
        crate::routes::phones::replace_all,
        crate::routes::phones::list,
        crate::routes::phones::get,
        crate::routes::phones::update_characteristics,
    ),
    components(
        schemas(
            CharacteristicDoc,
            PhoneDoc,
            NotFoundDoc,
            ValidationErrorItemDoc,
            ValidationErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "phones")
    )
)]
pub struct ApiDoc;
