//! Product import tests
//!
//! Runs both import modes against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{RecordFactory, TestDatabase};
    use bulk_ops::import::{ImportMode, ProductImporter, load_records};
    use bulk_ops::storage::database::products::find_product;
    use bulk_ops::{BatchProcessor, ProcessorConfig};
    use parking_lot::Mutex;
    use std::io::Write;
    use std::sync::Arc;

    fn processor(batch_size: usize, max_concurrent: usize) -> BatchProcessor {
        BatchProcessor::new(
            ProcessorConfig::new()
                .with_batch_size(batch_size)
                .with_max_concurrent(max_concurrent),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_atomic_import_commits_every_batch() {
        let db = TestDatabase::new().await;
        let importer = ProductImporter::new(db.db().clone(), processor(3, 2));

        let report = importer
            .import(RecordFactory::many(7), ImportMode::Atomic)
            .await;

        assert!(report.is_success());
        assert_eq!(report.summary.total, 7);
        assert_eq!(report.summary.succeeded, 7);
        assert_eq!(report.summary.batches, 3);
        assert_eq!(db.product_count().await, 7);
    }

    #[tokio::test]
    async fn test_atomic_import_rolls_back_batch_with_duplicate() {
        let db = TestDatabase::new().await;
        let importer = ProductImporter::new(db.db().clone(), processor(3, 1));

        // Batch 2 holds records 4, 5 and 6; record 5 reuses the SKU of record 4.
        let mut records = RecordFactory::many(7);
        records[4].sku = records[3].sku.clone();

        let result = importer.import_atomic(records).await;

        assert_eq!(result.total_processed, 7);
        assert_eq!(result.total_errors, 3);
        assert_eq!(result.batches, 3);

        let succeeded: Vec<&str> = result.succeeded.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(
            succeeded,
            vec!["SKU-0001", "SKU-0002", "SKU-0003", "SKU-0007"]
        );

        // Every item of the rolled-back batch shares one error
        let (_, first) = &result.failed[0];
        assert!(result.failed.iter().all(|(_, err)| Arc::ptr_eq(err, first)));
        assert!(first.is_database());

        assert_eq!(db.product_count().await, 4);
        let conn = db.db().connection();
        assert!(assert_ok!(find_product(conn, "SKU-0004").await).is_none());
        assert!(assert_ok!(find_product(conn, "SKU-0006").await).is_none());
        assert!(assert_ok!(find_product(conn, "SKU-0007").await).is_some());
    }

    #[tokio::test]
    async fn test_atomic_import_rejects_batch_with_invalid_record() {
        let db = TestDatabase::new().await;
        let importer = ProductImporter::new(db.db().clone(), processor(2, 1));

        let records = vec![
            RecordFactory::create(1),
            RecordFactory::create(2),
            RecordFactory::create(3),
            RecordFactory::invalid(4),
        ];

        let report = importer.import(records, ImportMode::Atomic).await;

        assert!(!report.is_success());
        assert_eq!(report.summary.succeeded, 2);
        assert_eq!(report.summary.failed, 2);

        let failed: Vec<&str> = report.failures.iter().map(|f| f.sku.as_str()).collect();
        assert_eq!(failed, vec!["SKU-0003", "SKU-0004"]);
        assert!(report.failures.iter().all(|f| f.error.contains("negative price")));

        assert_eq!(db.product_count().await, 2);
    }

    #[tokio::test]
    async fn test_each_import_keeps_valid_records() {
        let db = TestDatabase::new().await;
        let importer = ProductImporter::new(db.db().clone(), processor(2, 3));

        let mut records = RecordFactory::many(6);
        records[1] = RecordFactory::invalid(2);
        records[4].name = "   ".to_string();

        let result = importer.import_each(records).await;

        assert_eq!(result.total_processed, 6);
        assert_eq!(result.total_errors, 2);
        assert_eq!(result.batches, 3);

        let mut failed: Vec<&str> = result.failed.iter().map(|(r, _)| r.sku.as_str()).collect();
        failed.sort_unstable();
        assert_eq!(failed, vec!["SKU-0002", "SKU-0005"]);
        assert!(result.failed.iter().all(|(_, err)| !err.is_database()));

        assert_eq!(db.product_count().await, 4);
    }

    #[tokio::test]
    async fn test_each_import_reports_existing_sku() {
        let db = TestDatabase::with_product("SKU-0002").await;
        let importer = ProductImporter::new(db.db().clone(), processor(10, 1));

        let report = importer
            .import(RecordFactory::many(3), ImportMode::Each)
            .await;

        assert_eq!(report.summary.succeeded, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].sku, "SKU-0002");
        assert_eq!(db.product_count().await, 3);
    }

    #[tokio::test]
    async fn test_import_stores_trimmed_values() {
        let db = TestDatabase::new().await;
        let importer = ProductImporter::new(db.db().clone(), processor(5, 1));

        let mut record = RecordFactory::create(1);
        record.sku = "  SKU-0001 ".to_string();
        record.name = " Widget ".to_string();

        let report = importer.import(vec![record], ImportMode::Atomic).await;
        assert!(report.is_success());

        let stored = assert_ok!(find_product(db.db().connection(), "SKU-0001").await)
            .expect("product should be stored");
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.unit_price_cents, 101);
        assert_eq!(stored.stock, 10);
    }

    #[tokio::test]
    async fn test_import_reports_batch_completion() {
        let db = TestDatabase::new().await;
        let completed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&completed);

        let processor = BatchProcessor::new(ProcessorConfig::new().with_batch_size(4).on_batch_complete(
            move |batch| sink.lock().push((batch.batch_number, batch.succeeded, batch.failed)),
        ))
        .unwrap();
        let importer = ProductImporter::new(db.into_inner(), processor);

        let mut records = RecordFactory::many(10);
        records[9] = RecordFactory::invalid(10);
        importer.import(records, ImportMode::Atomic).await;

        assert_eq!(*completed.lock(), vec![(1, 4, 0), (2, 4, 0), (3, 0, 2)]);
    }

    #[tokio::test]
    async fn test_empty_import() {
        let db = TestDatabase::new().await;
        let importer = ProductImporter::new(db.db().clone(), processor(5, 2));

        for mode in [ImportMode::Atomic, ImportMode::Each] {
            let report = importer.import(Vec::new(), mode).await;
            assert!(report.is_success());
            assert_eq!(report.summary.total, 0);
            assert_eq!(report.summary.batches, 0);
        }
        assert_eq!(db.product_count().await, 0);
    }

    #[tokio::test]
    async fn test_import_from_json_lines_file() {
        let db = TestDatabase::new().await;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"sku": "A-1", "name": "Anvil", "unit_price_cents": 4999, "stock": 3}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"sku": "B-2", "name": "Bucket", "unit_price_cents": 799, "stock": 0}}"#
        )
        .unwrap();

        let records = assert_ok!(load_records(file.path()).await);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].stock, 0);

        let importer = ProductImporter::new(db.db().clone(), processor(1, 2));
        let report = importer.import(records, ImportMode::Each).await;
        assert!(report.is_success());
        assert_eq!(db.product_count().await, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "each");
        assert_eq!(json["summary"]["succeeded"], 2);
        assert!(json["failures"].as_array().unwrap().is_empty());
    }
}
