pub mod side_profile;
