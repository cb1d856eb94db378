diesel::table! {
    instrument_illumina (id) {
        id -> Integer,
        instrument_id -> Text,
        instrument_model -> Text,
        status -> Nullable<Text>,
    }
}

diesel::table! {
    instrument_nanopore (id) {
        id -> Integer,
        instrument_id -> Text,
        instrument_model -> Text,
        status -> Nullable<Text>,
    }
}

diesel::table! {
    sequencing_run_illumina (id) {
        id -> Integer,
        instrument_id -> Integer,
        sequencing_run_id -> Text,
        run_date -> Date,
        cluster_count -> BigInt,
        cluster_count_passed_filter -> BigInt,
        error_rate -> Double,
        q30_percent -> Double,
    }
}

diesel::table! {
    project (id) {
        id -> Integer,
        project_id -> Text,
    }
}

diesel::table! {
    sequenced_library_illumina (id) {
        id -> Integer,
        library_id -> Text,
        sequencing_run_id -> Integer,
        project_id -> Nullable<Integer>,
        samplesheet_project_id -> Nullable<Text>,
        num_reads -> BigInt,
        num_bases -> BigInt,
        q30_rate -> Double,
    }
}

diesel::table! {
    fastq_file (id) {
        id -> Integer,
        read_type -> Text,
        filename -> Text,
        md5_checksum -> Text,
        size_bytes -> BigInt,
        total_reads -> BigInt,
        total_bases -> BigInt,
        mean_read_length -> Double,
        max_read_length -> Integer,
        min_read_length -> Integer,
        q30_rate -> Double,
    }
}

diesel::joinable!(sequencing_run_illumina -> instrument_illumina (instrument_id));
diesel::joinable!(sequenced_library_illumina -> sequencing_run_illumina (sequencing_run_id));
diesel::joinable!(sequenced_library_illumina -> project (project_id));

diesel::allow_tables_to_appear_in_same_query!(
    fastq_file,
    instrument_illumina,
    instrument_nanopore,
    project,
    sequenced_library_illumina,
    sequencing_run_illumina,
);
