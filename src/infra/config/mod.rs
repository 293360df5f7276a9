pub mod rotator_config;
