mod config_yaml_deserialize;
