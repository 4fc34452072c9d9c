pub(crate) mod rewrite_params;
