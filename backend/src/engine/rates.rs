//! Economy tuning
//!
//! Every constant of the daily transition and the player actions lives
//! here, so scenario variants can reshape the economy without touching
//! engine code.

/// Tuning rates for the platform economy
///
/// Defaults reproduce the balance the game shipped with. Revenue values are
/// dollars; per-day terms are fractions of the affected metric.
#[derive(Debug, Clone)]
pub struct EconomyRates {
    /// Engagement gained per point of personalization per day
    pub engagement_gain_per_personalization: f64,

    /// Engagement lost per point of moderation per day
    pub engagement_drag_per_moderation: f64,

    /// Reputation gained per point of moderation per day
    pub reputation_gain_per_moderation: f64,

    /// Reputation lost per point of personalization per day
    pub reputation_drag_per_personalization: f64,

    /// Reputation lost per point of ad targeting per day
    pub reputation_drag_per_ad_targeting: f64,

    /// Moderation position above which the strictness bonus applies
    pub strict_moderation_threshold: f64,

    /// Flat reputation bonus for strict moderation
    pub strict_moderation_bonus: f64,

    /// Reputation never contributes less than this to ad revenue
    pub reputation_revenue_floor: f64,

    /// Dollars earned per engagement point, per ad targeting point,
    /// per reputation point, each day
    pub revenue_per_engagement_point: f64,

    /// User growth per engagement point per day
    pub user_growth_per_engagement: f64,

    /// User growth per reputation point per day
    pub user_growth_per_reputation: f64,

    /// Weight of the daily noise draw in user growth
    pub user_growth_noise_weight: f64,

    /// Reputation below this triggers daily churn (and the UI warning)
    pub reputation_warning_threshold: f64,

    /// Fraction of the day's starting users lost to churn
    pub churn_rate: f64,

    /// Revenue multiplier applied on a churn day
    pub churn_revenue_factor: f64,

    /// Reputation below this exposes the platform to regulators
    pub regulatory_reputation_threshold: f64,

    /// Chance per exposed day that a regulatory warning lands
    pub regulatory_warning_probability: f64,

    /// Revenue multiplier when a regulatory warning lands
    pub regulatory_revenue_factor: f64,

    /// Scandal chance per point of personalization per day
    pub scandal_probability_per_personalization: f64,

    /// Reputation lost to a filter bubble scandal
    pub scandal_reputation_loss: f64,

    /// Reputation gain of a first public campaign
    pub campaign_base_effect: f64,

    /// How much each prior campaign weakens the next one
    pub campaign_effect_decay: f64,

    /// Campaigns never gain less than this
    pub campaign_min_effect: f64,

    /// Campaigns never push reputation above this
    pub campaign_reputation_cap: f64,

    /// Revenue multiplier for funding a campaign
    pub campaign_revenue_factor: f64,

    /// Revenue fraction charged per unit of lever increase
    pub upgrade_charge_per_unit: f64,
}

impl Default for EconomyRates {
    fn default() -> Self {
        Self {
            engagement_gain_per_personalization: 0.05,
            engagement_drag_per_moderation: 0.03,
            reputation_gain_per_moderation: 0.04,
            reputation_drag_per_personalization: 0.02,
            reputation_drag_per_ad_targeting: 0.01,
            strict_moderation_threshold: 1.5,
            strict_moderation_bonus: 0.05,
            reputation_revenue_floor: 0.1,
            revenue_per_engagement_point: 100.0,       // dollars
            user_growth_per_engagement: 0.01,
            user_growth_per_reputation: 0.05,
            user_growth_noise_weight: 0.02,
            reputation_warning_threshold: 0.5,
            churn_rate: 0.01,                          // 1% of starting users
            churn_revenue_factor: 0.95,                // -5% revenue
            regulatory_reputation_threshold: 0.3,
            regulatory_warning_probability: 0.2,       // 1 in 5 exposed days
            regulatory_revenue_factor: 0.9,            // -10% revenue
            scandal_probability_per_personalization: 0.1,
            scandal_reputation_loss: 0.1,
            campaign_base_effect: 0.2,
            campaign_effect_decay: 0.05,
            campaign_min_effect: 0.05,
            campaign_reputation_cap: 2.0,
            campaign_revenue_factor: 0.9,              // -10% revenue
            upgrade_charge_per_unit: 0.05,             // 5% of revenue per unit
        }
    }
}
