//! Common US-GAAP concept names, grouped by statement.
//!
//! Names are bare (no `us-gaap:` prefix); the namespace is chosen when the
//! graph is opened.

use crate::statement::StatementKind;

/// Income Statement concepts
pub mod income_statement {
    /// Total Revenue
    pub const REVENUES: &str = "Revenues";

    /// Legacy revenue tag used by older filings
    pub const SALES_REVENUE_NET: &str = "SalesRevenueNet";

    /// Cost of Revenue
    pub const COST_OF_REVENUE: &str = "CostOfRevenue";

    /// Gross Profit
    pub const GROSS_PROFIT: &str = "GrossProfit";

    /// Total Operating Expenses
    pub const OPERATING_EXPENSES: &str = "OperatingExpenses";

    /// Research and Development
    pub const RESEARCH_AND_DEVELOPMENT: &str = "ResearchAndDevelopmentExpense";

    /// Selling, General and Administrative
    pub const SELLING_GENERAL_ADMINISTRATIVE: &str = "SellingGeneralAndAdministrativeExpense";

    /// Operating Income (Loss)
    pub const OPERATING_INCOME: &str = "OperatingIncomeLoss";

    /// Interest Expense
    pub const INTEREST_EXPENSE: &str = "InterestExpense";

    /// Income Tax Expense (Benefit)
    pub const INCOME_TAX: &str = "IncomeTaxExpenseBenefit";

    /// Net Income (Loss)
    pub const NET_INCOME: &str = "NetIncomeLoss";

    /// Default column order for the income statement.
    pub const DEFAULT: &[&str] = &[
        REVENUES,
        SALES_REVENUE_NET,
        COST_OF_REVENUE,
        GROSS_PROFIT,
        OPERATING_EXPENSES,
        RESEARCH_AND_DEVELOPMENT,
        SELLING_GENERAL_ADMINISTRATIVE,
        OPERATING_INCOME,
        INTEREST_EXPENSE,
        INCOME_TAX,
        NET_INCOME,
    ];
}

/// Balance Sheet concepts
pub mod balance_sheet {
    /// Total Assets
    pub const ASSETS: &str = "Assets";

    /// Current Assets
    pub const CURRENT_ASSETS: &str = "AssetsCurrent";

    /// Total Liabilities
    pub const LIABILITIES: &str = "Liabilities";

    /// Current Liabilities
    pub const CURRENT_LIABILITIES: &str = "LiabilitiesCurrent";

    /// Stockholders' Equity
    pub const STOCKHOLDERS_EQUITY: &str = "StockholdersEquity";

    /// Stockholders' Equity including noncontrolling interest
    pub const TOTAL_EQUITY: &str =
        "StockholdersEquityIncludingPortionAttributableToNoncontrollingInterest";

    /// Retained Earnings (Accumulated Deficit)
    pub const RETAINED_EARNINGS: &str = "RetainedEarningsAccumulatedDeficit";

    /// Cash and Cash Equivalents
    pub const CASH: &str = "CashAndCashEquivalentsAtCarryingValue";

    /// Inventory, net
    pub const INVENTORY: &str = "InventoryNet";

    /// Common Stock Shares Outstanding
    pub const SHARES_OUTSTANDING: &str = "CommonStockSharesOutstanding";

    /// Default column order for the balance sheet.
    pub const DEFAULT: &[&str] = &[
        ASSETS,
        CURRENT_ASSETS,
        LIABILITIES,
        CURRENT_LIABILITIES,
        STOCKHOLDERS_EQUITY,
        TOTAL_EQUITY,
        RETAINED_EARNINGS,
        CASH,
        INVENTORY,
        SHARES_OUTSTANDING,
    ];
}

/// Cash Flow Statement concepts
pub mod cash_flow {
    /// Operating Cash Flows
    pub const OPERATING_CASH_FLOW: &str = "NetCashProvidedByUsedInOperatingActivities";

    /// Investing Cash Flows
    pub const INVESTING_CASH_FLOW: &str = "NetCashProvidedByUsedInInvestingActivities";

    /// Financing Cash Flows
    pub const FINANCING_CASH_FLOW: &str = "NetCashProvidedByUsedInFinancingActivities";

    /// Capital Expenditures
    pub const CAPEX: &str = "PaymentsToAcquirePropertyPlantAndEquipment";

    /// Depreciation, Depletion and Amortization
    pub const DEPRECIATION: &str = "DepreciationDepletionAndAmortization";

    /// Share Repurchases
    pub const BUYBACKS: &str = "PaymentsForRepurchaseOfCommonStock";

    /// Long-term Debt Issued
    pub const DEBT_ISSUED: &str = "ProceedsFromIssuanceOfLongTermDebt";

    /// Long-term Debt Repaid
    pub const DEBT_REPAID: &str = "RepaymentsOfLongTermDebt";

    /// Dividends Paid
    pub const DIVIDENDS: &str = "PaymentsOfDividends";

    /// Default column order for the cash flow statement.
    pub const DEFAULT: &[&str] = &[
        OPERATING_CASH_FLOW,
        INVESTING_CASH_FLOW,
        FINANCING_CASH_FLOW,
        CAPEX,
        DEPRECIATION,
        BUYBACKS,
        DEBT_ISSUED,
        DEBT_REPAID,
        DIVIDENDS,
    ];
}

/// Returns the default concept list for a statement as owned strings.
pub fn defaults(kind: StatementKind) -> Vec<String> {
    let names = match kind {
        StatementKind::IncomeStatement => income_statement::DEFAULT,
        StatementKind::BalanceSheet => balance_sheet::DEFAULT,
        StatementKind::CashFlow => cash_flow::DEFAULT,
    };
    names.iter().map(|name| (*name).to_string()).collect()
}
