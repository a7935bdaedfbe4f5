pub mod tf_idf;
