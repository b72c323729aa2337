//! Transactional batch tests against SQLite

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestDatabase;
    use bulk_ops::storage::database::products::{NewProduct, count_products, insert_product};
    use bulk_ops::{BatchProcessor, BulkError, ProcessorConfig, TransactionManager};

    fn product(sku: &str) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            name: format!("Product {}", sku),
            unit_price_cents: 250,
            stock: 4,
        }
    }

    #[tokio::test]
    async fn test_manager_commit_persists_rows() {
        let db = TestDatabase::new().await;
        let manager = db.db().transaction_manager();

        let tx = assert_ok!(manager.begin().await);
        assert_ok!(insert_product(&tx, product("C-1")).await);
        assert_ok!(manager.commit(tx).await);

        assert_eq!(db.product_count().await, 1);
    }

    #[tokio::test]
    async fn test_manager_rollback_discards_rows() {
        let db = TestDatabase::new().await;
        let manager = db.db().transaction_manager();

        let tx = assert_ok!(manager.begin().await);
        assert_ok!(insert_product(&tx, product("R-1")).await);
        assert_eq!(assert_ok!(count_products(&tx).await), 1);
        assert_ok!(manager.rollback(tx).await);

        assert_eq!(db.product_count().await, 0);
    }

    #[tokio::test]
    async fn test_failed_batch_undoes_partial_writes() {
        let db = TestDatabase::new().await;
        let manager = db.db().transaction_manager();
        let processor =
            BatchProcessor::new(ProcessorConfig::new().with_batch_size(3)).unwrap();

        let skus: Vec<String> = (1..=6).map(|n| format!("P-{}", n)).collect();

        // Rows are written one at a time, so the failing batch has already
        // stored some rows when it gives up.
        let result = processor
            .process_with_transaction(skus, &manager, |batch, tx| {
                Box::pin(async move {
                    for sku in batch {
                        insert_product(tx, product(sku)).await?;
                        if sku == "P-5" {
                            return Err(BulkError::validation("P-5 is discontinued"));
                        }
                    }
                    Ok::<(), BulkError>(())
                })
            })
            .await;

        assert_eq!(result.succeeded, vec!["P-1", "P-2", "P-3"]);
        assert_eq!(result.failed.len(), 3);
        assert!(
            result
                .failed
                .iter()
                .all(|(_, err)| err.to_string().contains("discontinued"))
        );
        assert_eq!(db.product_count().await, 3);
    }
}
