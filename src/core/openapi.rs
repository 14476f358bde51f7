use utoipa::{Modify, OpenApi};

use crate::features::forms::{dtos as forms_dtos, handlers as forms_handlers};
use crate::features::locations::{
    dtos as locations_dtos, handlers as locations_handlers, models as locations_models,
};
use crate::features::registrations::{
    dtos as registrations_dtos, handlers as registrations_handlers,
};
use crate::features::roster::{dtos as roster_dtos, handlers as roster_handlers};
use crate::features::validation::{dtos as validation_dtos, handlers as validation_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations
        locations_handlers::list_regions,
        locations_handlers::list_provinces,
        locations_handlers::list_cities,
        locations_handlers::list_barangays,
        locations_handlers::get_status,
        // Validation
        validation_handlers::check_fields,
        // Registrations
        registrations_handlers::register_user,
        // Forms
        forms_handlers::create_form,
        forms_handlers::get_form,
        forms_handlers::update_selection,
        forms_handlers::submit_form,
        forms_handlers::delete_form,
        // Roster
        roster_handlers::list_users,
        roster_handlers::roster_html,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ApiResponse<Vec<locations_dtos::GeoUnitResponseDto>>,
            ApiResponse<locations_dtos::DirectoryStatusDto>,
            ApiResponse<validation_dtos::FieldChecksResponseDto>,
            ApiResponse<registrations_dtos::RegistrationResponseDto>,
            ApiResponse<forms_dtos::FormStateDto>,
            ApiResponse<roster_dtos::RosterResponseDto>,
            // Locations
            locations_models::GeoLevel,
            locations_models::SelectionState,
            locations_dtos::GeoUnitResponseDto,
            locations_dtos::DirectoryStatusDto,
            // Validation
            validation_dtos::ValidateFieldsDto,
            validation_dtos::FieldStatus,
            validation_dtos::FieldCheckDto,
            validation_dtos::FieldChecksResponseDto,
            // Registrations
            registrations_dtos::PersonalDetailsDto,
            registrations_dtos::RegisterUserDto,
            registrations_dtos::RegisteredUserDto,
            registrations_dtos::RedirectDto,
            registrations_dtos::RegistrationResponseDto,
            // Forms
            forms_dtos::SelectionUpdateDto,
            forms_dtos::FormOptionsDto,
            forms_dtos::FormStateDto,
            // Roster
            roster_dtos::RosterStatus,
            roster_dtos::RosterCardDto,
            roster_dtos::RosterResponseDto,
        )
    ),
    tags(
        (name = "locations", description = "Philippine regions, provinces, cities and barangays"),
        (name = "validation", description = "Advisory checks for email, contact number and password"),
        (name = "registrations", description = "User registration"),
        (name = "forms", description = "Server-held registration forms with cascading location fields"),
        (name = "roster", description = "Registered users"),
    ),
    info(
        title = "Rehistro API",
        version = "0.1.0",
        description = "Registration service with cascading Philippine location selection"
    )
)]
pub struct ApiDoc;

/// Runtime title, version and description for the generated document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
