//! Order placement workflow.
//!
//! Database work for each operation runs in one transaction; notifications and the
//! payment provider are only contacted after commit and their failures never change
//! the outcome of the operation.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::order::PaymentType,
    server::{
        data::{
            driver::DriverRepository, order::OrderRepository,
            order_status::OrderStatusRepository,
        },
        error::{auth::AuthError, ledger::LedgerError, workflow::WorkflowError, AppError},
        model::{
            account::{Account, AccountRef, Driver},
            order::{
                ApplyOrderUpdateParam, AssignDriverParam, Order, PaginatedOrders,
                PlaceOrderParam, UpdateOrderParam,
            },
            status::{ORDER_STATUS_CANCELLED, ORDER_STATUS_CREATED},
        },
        service::{
            ledger::{order_payment, order_refund, LedgerService},
            notification::{message, Notifier},
            payment::{PaymentLinkRequest, PaymentProvider, PAYMENT_LINK_TIMEOUT},
        },
        util::money::{prepay_amount, split_commission},
    },
};

/// Orders shown to drivers looking for work.
pub const AVAILABLE_ORDERS_LIMIT: u64 = 20;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
    payment: Option<&'a dyn PaymentProvider>,
    app_url: &'a str,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Notification fan-out used after commit
    /// - `payment` - Payment provider, `None` when online payments are not configured
    /// - `app_url` - Public URL the payer returns to after checkout
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a Notifier,
        payment: Option<&'a dyn PaymentProvider>,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            notifier,
            payment,
            app_url,
        }
    }

    /// Places a new order for `param.user_id`.
    ///
    /// When paying from balance the price is debited in the same transaction as the order
    /// insert, so a failed debit leaves no order behind. After commit the staff and the
    /// passenger are notified and, for `full`/`prepay` orders not paid from balance, a
    /// payment link is requested.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order, with `payment_url` when a link was obtained
    /// - `Err(LedgerError::InvalidAmount)` - Paying from balance with a zero price
    /// - `Err(LedgerError::InsufficientFunds)` - Balance does not cover the price
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn place(&self, param: PlaceOrderParam) -> Result<Order, AppError> {
        if param.payment_from_balance && param.price <= 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        let prepay = match param.payment_type {
            PaymentType::Prepay => prepay_amount(param.price),
            _ => 0,
        };
        let user_id = param.user_id;
        let from_balance = param.payment_from_balance;

        let txn = self.db.begin().await?;
        let order = OrderRepository::new(&txn).create(param, prepay).await?;
        if from_balance {
            LedgerService::new(&txn)
                .debit(order_payment(user_id, order.id, order.price))
                .await?;
        }
        txn.commit().await?;

        tracing::info!(
            "Order #{} placed by user {} (price {}, {})",
            order.id,
            order.user_id,
            order.price,
            order.payment_type.as_str()
        );

        self.notifier.dispatch(message::order_placed(&order));

        Ok(self.attach_payment_link(order).await)
    }

    /// Requests and stores a payment link, returning the order unchanged on any failure.
    async fn attach_payment_link(&self, mut order: Order) -> Order {
        let Some(provider) = self.payment else {
            return order;
        };
        let amount = order.online_payment_amount();
        if !order.requires_online_payment() || amount <= 0 {
            return order;
        }

        let request = PaymentLinkRequest {
            order_id: order.id,
            amount,
            description: format!("Transfer order #{}", order.id),
            return_url: format!("{}/orders/{}", self.app_url.trim_end_matches('/'), order.id),
        };

        let link = match tokio::time::timeout(
            PAYMENT_LINK_TIMEOUT,
            provider.create_payment_link(request),
        )
        .await
        {
            Ok(Ok(link)) => link,
            Ok(Err(e)) => {
                tracing::warn!("Payment link for order #{} failed: {}", order.id, e);
                return order;
            }
            Err(_) => {
                tracing::warn!("Payment link for order #{} timed out", order.id);
                return order;
            }
        };

        if let Err(e) = OrderRepository::new(self.db)
            .set_payment_link(order.id, &link.url, &link.provider_payment_id)
            .await
        {
            tracing::warn!("Failed to store payment link for order #{}: {}", order.id, e);
        }

        order.payment_url = Some(link.url);
        order.payment_id = Some(link.provider_payment_id);
        order
    }

    /// Assigns `driver` to an open order.
    ///
    /// The commission is computed from the driver's rate and the order price; the
    /// conditional update only succeeds while the order is unclaimed, so concurrent
    /// accepts have exactly one winner.
    ///
    /// # Returns
    /// - `Ok(Order)` - Accepted order with commission and driver amount
    /// - `Err(AuthError::AccessDenied)` - Driver not approved or not active
    /// - `Err(WorkflowError::OrderNotFound)` - Unknown order
    /// - `Err(WorkflowError::OrderUnavailable)` - Already claimed or no longer open
    pub async fn accept(&self, order_id: i32, driver: &Driver) -> Result<Order, AppError> {
        if !driver.can_accept_orders() {
            return Err(AuthError::AccessDenied(
                format!("driver {}", driver.id),
                "driver is not approved or not active".to_string(),
            )
            .into());
        }

        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;
        if order.driver_id.is_some() || order.status_id != ORDER_STATUS_CREATED {
            return Err(WorkflowError::OrderUnavailable(order_id).into());
        }

        let (commission_amount, driver_amount) =
            split_commission(order.price, driver.commission_rate_bp);

        let txn = self.db.begin().await?;
        let claimed = OrderRepository::new(&txn)
            .assign_driver(AssignDriverParam {
                order_id,
                driver_id: driver.id,
                price: order.price,
                commission_amount,
                driver_amount,
            })
            .await?;
        if !claimed {
            return Err(WorkflowError::OrderUnavailable(order_id).into());
        }
        DriverRepository::new(&txn)
            .increment_total_orders(driver.id)
            .await?;
        let accepted = OrderRepository::new(&txn)
            .find_by_id(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;
        txn.commit().await?;

        tracing::info!(
            "Order #{} accepted by driver {} (commission {}, driver amount {})",
            order_id,
            driver.id,
            commission_amount,
            driver_amount
        );

        self.notifier
            .dispatch(message::order_accepted(&accepted, driver));

        Ok(accepted)
    }

    /// Cancels an order on behalf of its owner or an admin.
    ///
    /// The refund is what the ledger still holds for the order (payments minus earlier
    /// refunds) and is credited in the same transaction as the status change.
    ///
    /// # Returns
    /// - `Ok(Order)` - Cancelled order
    /// - `Err(WorkflowError::OrderNotFound)` - Unknown order
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the owner nor an admin
    /// - `Err(WorkflowError::OrderUnavailable)` - Order already cancelled or completed
    pub async fn cancel(&self, order_id: i32, actor: &Account) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        let allowed = match actor {
            Account::Admin(_) => true,
            Account::User(user) => user.id == order.user_id,
            Account::Driver(_) => false,
        };
        if !allowed {
            return Err(AuthError::AccessDenied(
                actor.principal().to_string(),
                format!("cannot cancel order #{}", order_id),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let repo = OrderRepository::new(&txn);
        if !repo.cancel(order_id).await? {
            return Err(WorkflowError::OrderUnavailable(order_id).into());
        }
        let cancelled = repo
            .find_by_id(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        let ledger = LedgerService::new(&txn);
        let paid = ledger
            .order_paid_amount(AccountRef::User(cancelled.user_id), order_id)
            .await?;
        let refunded = if paid > 0 {
            ledger
                .credit(order_refund(cancelled.user_id, order_id, paid))
                .await?;
            Some(paid)
        } else {
            None
        };
        txn.commit().await?;

        tracing::info!("Order #{} cancelled by {}", order_id, actor.principal());

        self.notifier
            .dispatch(message::order_cancelled(&cancelled, refunded));

        Ok(cancelled)
    }

    /// Admin update of status, price and notes. Pushes the new status label to the
    /// passenger when the status changed.
    ///
    /// Cancellation goes through `cancel` only, so an update can neither move an order
    /// into the cancelled status nor reopen a cancelled one. The price of an order paid
    /// from balance is fixed; repricing an assigned order recomputes the commission split
    /// from the driver's rate.
    ///
    /// # Returns
    /// - `Ok(Order)` - Updated order
    /// - `Err(AppError::Validation)` - Unknown status id, cancel by status, or repricing a
    ///   balance-paid order
    /// - `Err(WorkflowError::OrderNotFound)` - Unknown order
    /// - `Err(WorkflowError::OrderUnavailable)` - Order is cancelled or changed concurrently
    pub async fn update(&self, param: UpdateOrderParam) -> Result<Order, AppError> {
        let order_id = param.order_id;
        let status = OrderStatusRepository::new(self.db)
            .find_by_id(param.status_id)
            .await?
            .ok_or_else(|| AppError::validation("status_id", "Unknown order status"))?;

        let txn = self.db.begin().await?;
        let repo = OrderRepository::new(&txn);
        let previous = repo
            .find_by_id(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        if previous.status_id == ORDER_STATUS_CANCELLED {
            if param.status_id != ORDER_STATUS_CANCELLED {
                return Err(WorkflowError::OrderUnavailable(order_id).into());
            }
        } else if param.status_id == ORDER_STATUS_CANCELLED {
            return Err(AppError::validation(
                "status_id",
                "Orders are cancelled through the cancel action",
            ));
        }

        let new_price = param.price.filter(|price| *price != previous.price);
        if new_price.is_some() && previous.payment_from_balance {
            return Err(AppError::validation(
                "price",
                "Price of an order paid from balance cannot be changed",
            ));
        }

        let split = match (new_price, previous.driver_id) {
            (Some(price), Some(driver_id)) => {
                let driver = DriverRepository::new(&txn)
                    .find_by_id(driver_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError(format!(
                            "order #{} is assigned to missing driver {}",
                            order_id, driver_id
                        ))
                    })?;
                Some(split_commission(price, driver.commission_rate_bp))
            }
            _ => None,
        };

        let applied = repo
            .update(ApplyOrderUpdateParam {
                order_id,
                expected_status_id: previous.status_id,
                expected_price: previous.price,
                status_id: param.status_id,
                price: new_price,
                split,
                notes: param.notes,
            })
            .await?;
        if !applied {
            return Err(WorkflowError::OrderUnavailable(order_id).into());
        }
        let updated = repo
            .find_by_id(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;
        txn.commit().await?;

        if previous.status_id != updated.status_id {
            tracing::info!("Order #{} moved to status '{}'", order_id, status.name);
            self.notifier
                .dispatch(message::order_status_changed(&updated, &status.name));
        }

        Ok(updated)
    }

    /// Gets an order visible to `actor`; orders the actor may not see are reported as
    /// not found.
    pub async fn get_by_id(&self, order_id: i32, actor: &Account) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .filter(|order| order.visible_to(actor))
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        Ok(order)
    }

    /// Orders placed by a user or assigned to a driver, newest first.
    pub async fn get_for_account(&self, actor: &Account) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = match actor {
            Account::User(user) => repo.get_by_user(user.id).await?,
            Account::Driver(driver) => repo.get_by_driver(driver.id).await?,
            Account::Admin(_) => {
                return Err(AppError::BadRequest(
                    "Admins list orders through the admin endpoint".to_string(),
                ))
            }
        };

        Ok(orders)
    }

    /// Open orders for drivers, oldest first.
    pub async fn get_available(&self) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db)
            .get_available(AVAILABLE_ORDERS_LIMIT)
            .await?)
    }

    /// All orders newest first, for the admin console.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
