//! Initial database migration.
//!
//! Creates all enums, tables, constraints, indexes, and seed data for the
//! Stockroom schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CATALOG
        // ============================================================
        db.execute_unprepared(CATEGORIES_SQL).await?;
        db.execute_unprepared(SUPPLIERS_SQL).await?;
        db.execute_unprepared(PRODUCTS_SQL).await?;

        // ============================================================
        // PART 3: STOCK LEDGER
        // ============================================================
        db.execute_unprepared(MOVEMENTS_SQL).await?;

        // ============================================================
        // PART 4: BUDGET WORKFLOW
        // ============================================================
        db.execute_unprepared(ACCOUNT_CODES_SQL).await?;
        db.execute_unprepared(BUDGET_REQUESTS_SQL).await?;
        db.execute_unprepared(APPROVALS_SQL).await?;
        db.execute_unprepared(REQUEST_COUNTERS_SQL).await?;

        // ============================================================
        // PART 5: INDEXES
        // ============================================================
        db.execute_unprepared(INDEXES_SQL).await?;

        // ============================================================
        // PART 6: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_ACCOUNT_CODES_SQL).await?;
        db.execute_unprepared(SEED_CATEGORIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Stock movement direction
CREATE TYPE movement_type AS ENUM ('in', 'out');

-- Budget request workflow status
CREATE TYPE request_status AS ENUM ('PENDING', 'APPROVED', 'REJECTED');

-- Approval decision
CREATE TYPE approval_decision AS ENUM ('approved', 'rejected');
";

const CATEGORIES_SQL: &str = r"
CREATE TABLE categories (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL UNIQUE,
    description TEXT,
    is_medicine BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const SUPPLIERS_SQL: &str = r"
CREATE TABLE suppliers (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255),
    phone VARCHAR(50),
    address TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const PRODUCTS_SQL: &str = r"
CREATE TABLE products (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    sku VARCHAR(100) NOT NULL UNIQUE,
    description TEXT,
    category_id UUID REFERENCES categories(id) ON DELETE SET NULL,
    supplier_id UUID REFERENCES suppliers(id) ON DELETE SET NULL,
    unit_price NUMERIC(12, 2) NOT NULL DEFAULT 0,
    -- The balance is denormalized; the CHECK keeps an overdraw from ever
    -- being committed even if a write slips past the repository.
    current_stock INTEGER NOT NULL DEFAULT 0 CHECK (current_stock >= 0),
    min_stock INTEGER NOT NULL DEFAULT 0,
    max_stock INTEGER,
    unit VARCHAR(50),
    location VARCHAR(100),
    barcode VARCHAR(100),
    expiry_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const MOVEMENTS_SQL: &str = r#"
CREATE TABLE movements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    "type" movement_type NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity > 0),
    reason VARCHAR(255) NOT NULL,
    reference VARCHAR(255),
    notes TEXT,
    created_by VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

const ACCOUNT_CODES_SQL: &str = r"
CREATE TABLE account_codes (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    code VARCHAR(20) NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL
);
";

const BUDGET_REQUESTS_SQL: &str = r"
CREATE TABLE budget_requests (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    request_no VARCHAR(20) NOT NULL UNIQUE,
    requester VARCHAR(255) NOT NULL,
    request_date DATE NOT NULL,
    account_code VARCHAR(20) NOT NULL,
    account_name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL CHECK (amount > 0),
    note TEXT,
    material_list JSONB NOT NULL DEFAULT '[]',
    status request_status NOT NULL DEFAULT 'PENDING',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const APPROVALS_SQL: &str = r"
CREATE TABLE approvals (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    -- UNIQUE: a request is decided exactly once
    request_id UUID NOT NULL UNIQUE REFERENCES budget_requests(id) ON DELETE CASCADE,
    decision approval_decision NOT NULL,
    remark TEXT,
    approver_name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const REQUEST_COUNTERS_SQL: &str = r"
CREATE TABLE request_counters (
    year INTEGER PRIMARY KEY,
    last_sequence INTEGER NOT NULL DEFAULT 0
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_products_category ON products(category_id);
CREATE INDEX idx_products_supplier ON products(supplier_id);
CREATE INDEX idx_movements_product ON movements(product_id);
CREATE INDEX idx_movements_created_at ON movements(created_at DESC);
CREATE INDEX idx_budget_requests_created_at ON budget_requests(created_at DESC);
CREATE INDEX idx_budget_requests_status ON budget_requests(status);
";

const SEED_ACCOUNT_CODES_SQL: &str = r"
INSERT INTO account_codes (code, name) VALUES
    ('5101', 'Office supplies'),
    ('5102', 'Medical supplies'),
    ('5103', 'Cleaning supplies'),
    ('5201', 'Equipment maintenance'),
    ('5301', 'General expenses')
ON CONFLICT (code) DO NOTHING;
";

const SEED_CATEGORIES_SQL: &str = r"
INSERT INTO categories (name, description, is_medicine) VALUES
    ('General', 'General stock items', FALSE),
    ('Medicine', 'Medicinal products; expiry date required', TRUE),
    ('Consumables', 'Consumable supplies', FALSE)
ON CONFLICT (name) DO NOTHING;
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS approvals CASCADE;
DROP TABLE IF EXISTS budget_requests CASCADE;
DROP TABLE IF EXISTS request_counters CASCADE;
DROP TABLE IF EXISTS account_codes CASCADE;
DROP TABLE IF EXISTS movements CASCADE;
DROP TABLE IF EXISTS products CASCADE;
DROP TABLE IF EXISTS suppliers CASCADE;
DROP TABLE IF EXISTS categories CASCADE;

-- Drop enums
DROP TYPE IF EXISTS approval_decision;
DROP TYPE IF EXISTS request_status;
DROP TYPE IF EXISTS movement_type;
";
