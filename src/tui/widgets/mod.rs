pub mod custom_voice_input;
pub mod voice_id_field;
