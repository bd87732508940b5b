use bytes::Bytes;
use tracing::{info, instrument};

use crate::domain::{
    allergy::{entities::Allergy, ports::AllergyRepository, value_objects::AllergyOrder},
    analysis::{
        entities::IngredientAnalysis,
        ports::{AnalysisService, LLMClient},
    },
    authentication::{ports::AuthProvider, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    scan::{
        entities::{MenuScan, ProductScan},
        helpers::{
            UNREADABLE_IMAGE_MESSAGE, extract_ingredients, is_readable_ingredient_list,
            menu_product_name, product_name_or_default,
        },
        ports::ScanService,
        value_objects::{ScanMenuInput, ScanProductInput},
    },
    scan_history::{entities::NewScanRecord, ports::ScanHistoryRepository},
};

impl<AU, AL, SH, OCR, LLM> ScanService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn scan_product(
        &self,
        identity: Identity,
        input: ScanProductInput,
    ) -> Result<ProductScan, CoreError> {
        let image = require_image(input.image)?;
        let allergies = self.require_allergies(identity.clone()).await?;
        let product_name = product_name_or_default(input.product_name);

        let extracted_text = self.recognize(image).await?;
        let ingredients = extract_ingredients(&extracted_text);

        if !is_readable_ingredient_list(&ingredients) {
            info!("No readable ingredient list found, skipping analysis");
            return Ok(ProductScan {
                product_name,
                extracted_text,
                ingredients: Vec::new(),
                analysis: IngredientAnalysis {
                    text: UNREADABLE_IMAGE_MESSAGE.to_string(),
                    has_matches: false,
                    matched_allergies: Vec::new(),
                },
                scan_id: None,
            });
        }

        let allergy_names = allergies
            .iter()
            .map(|a| a.name.to_lowercase())
            .collect::<Vec<_>>();

        let analysis = self
            .analyze_ingredients(ingredients.clone(), allergy_names)
            .await?;

        let record = self
            .scan_history_repository
            .create_record(
                identity.clone(),
                NewScanRecord {
                    user_id: identity.id(),
                    product_name: Some(product_name.clone()),
                    ingredients: ingredients.clone(),
                    matched_allergies: analysis.matched_allergies.clone(),
                    has_matches: analysis.has_matches,
                    analysis: analysis.text.clone(),
                },
            )
            .await?;

        info!(scan_id = %record.id, has_matches = analysis.has_matches, "Product scan stored");

        Ok(ProductScan {
            product_name,
            extracted_text,
            ingredients,
            analysis,
            scan_id: Some(record.id),
        })
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn scan_menu(
        &self,
        identity: Identity,
        input: ScanMenuInput,
    ) -> Result<MenuScan, CoreError> {
        let image = require_image(input.image)?;
        let allergies = self.require_allergies(identity.clone()).await?;

        let extracted_text = self.recognize(image).await?;

        let allergy_names = allergies.into_iter().map(|a| a.name).collect::<Vec<_>>();

        let analysis = self
            .analyze_menu_items(extracted_text.clone(), allergy_names.clone())
            .await?;

        // Menus are always stored flagged, whatever the narrative says.
        let record = self
            .scan_history_repository
            .create_record(
                identity.clone(),
                NewScanRecord {
                    user_id: identity.id(),
                    product_name: Some(menu_product_name(input.restaurant_name)),
                    ingredients: vec![extracted_text.clone()],
                    matched_allergies: allergy_names,
                    has_matches: true,
                    analysis,
                },
            )
            .await?;

        info!(scan_id = %record.id, "Menu scan stored");

        Ok(MenuScan {
            extracted_text,
            record,
        })
    }
}

impl<AU, AL, SH, OCR, LLM> Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    pub(crate) async fn require_allergies(
        &self,
        identity: Identity,
    ) -> Result<Vec<Allergy>, CoreError> {
        let allergies = self
            .allergy_repository
            .fetch_by_user(identity, AllergyOrder::Name)
            .await?;

        if allergies.is_empty() {
            return Err(CoreError::NoAllergies);
        }

        Ok(allergies)
    }

    async fn recognize(&self, image: Bytes) -> Result<String, CoreError> {
        self.text_extractor.extract_text(image).await.map_err(|e| {
            tracing::error!("Text extraction failed: {}", e);
            CoreError::OcrFailed
        })
    }
}

fn require_image(image: Option<Bytes>) -> Result<Bytes, CoreError> {
    image
        .filter(|data| !data.is_empty())
        .ok_or(CoreError::MissingImage)
}
