mod detector_probes;
mod path_properties;
mod rewrite_text;
