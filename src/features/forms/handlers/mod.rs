pub mod form_handler;

pub use form_handler::{
    __path_create_form, __path_delete_form, __path_get_form, __path_submit_form,
    __path_update_selection, create_form, delete_form, get_form, submit_form, update_selection,
};
